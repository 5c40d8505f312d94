use scooper_core::{
    Analysis, AnalysisCache, CardGroup, EffectivenessEntry, FrequencyEntry, Insights,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tiny_http::{Header, Method, Response, Server, StatusCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_SCOOPEES: &str = "1 (2), 2 (1), 3-5 (2)";
const DEFAULT_SCOOPERS: &str = "5-7 (2), 8 (3)";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let server = Server::http("0.0.0.0:7980").expect("start server");
    info!("Scooper analysis server on http://localhost:7980");
    let state = Arc::new(Mutex::new(AppState::new()));
    for request in server.incoming_requests() {
        let state = state.clone();
        if let Err(err) = handle_request(request, state) {
            error!("request error: {err}");
        }
    }
}

struct AppState {
    scoopee_spec: String,
    scooper_spec: String,
    cache: AnalysisCache,
}

impl AppState {
    fn new() -> Self {
        Self {
            scoopee_spec: DEFAULT_SCOOPEES.to_string(),
            scooper_spec: DEFAULT_SCOOPERS.to_string(),
            cache: AnalysisCache::new(),
        }
    }

    fn current(&mut self) -> Arc<Analysis> {
        self.cache.analyze(&self.scoopee_spec, &self.scooper_spec)
    }
}

#[derive(Serialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    state: UiAnalysis,
}

#[derive(Serialize)]
struct UiAnalysis {
    scoopee_spec: String,
    scooper_spec: String,
    scoopees: Vec<CardGroup>,
    scoopers: Vec<CardGroup>,
    sum_frequency: Vec<FrequencyEntry>,
    scooper_effectiveness: Vec<EffectivenessEntry>,
    insights: Insights,
    total_combinations: usize,
    warnings: Vec<String>,
}

#[derive(Deserialize)]
struct SpecsRequest {
    #[serde(default)]
    scoopees: Option<String>,
    #[serde(default)]
    scoopers: Option<String>,
}

fn handle_request(
    mut request: tiny_http::Request,
    state: Arc<Mutex<AppState>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    info!(method = ?request.method(), url = %url, "request");
    match (request.method(), url.as_str()) {
        (&Method::Get, "/") => {
            respond_with_file(request, web_path("index.html"), "text/html; charset=utf-8")?;
        }
        (&Method::Get, "/app.js") => {
            respond_with_file(request, web_path("app.js"), "application/javascript")?;
        }
        (&Method::Get, "/styles.css") => {
            respond_with_file(request, web_path("styles.css"), "text/css; charset=utf-8")?;
        }
        (&Method::Get, "/api/state") => {
            let mut guard = state.lock().unwrap();
            let response = build_response(&mut *guard, None);
            respond_json(request, response)?;
        }
        (&Method::Post, "/api/specs") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let mut guard = state.lock().unwrap();
            let err = match serde_json::from_str::<SpecsRequest>(&body) {
                Ok(specs) => {
                    if let Some(scoopees) = specs.scoopees {
                        guard.scoopee_spec = scoopees;
                    }
                    if let Some(scoopers) = specs.scoopers {
                        guard.scooper_spec = scoopers;
                    }
                    None
                }
                Err(err) => Some(format!("invalid request body: {err}")),
            };
            let response = build_response(&mut *guard, err);
            respond_json(request, response)?;
        }
        _ => {
            request.respond(Response::empty(StatusCode(404)))?;
        }
    }
    Ok(())
}

fn web_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("web")
        .join(file)
}

fn respond_with_file(
    request: tiny_http::Request,
    path: PathBuf,
    content_type: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = std::fs::File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    let header = Header::from_bytes(&b"Content-Type"[..], content_type)
        .map_err(|_| "invalid header")?;
    let response = Response::from_data(content).with_header(header);
    request.respond(response)?;
    Ok(())
}

fn respond_json(
    request: tiny_http::Request,
    response: ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&response)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "invalid header")?;
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}

fn build_response(state: &mut AppState, err: Option<String>) -> ApiResponse {
    let analysis = state.current();
    ApiResponse {
        ok: err.is_none(),
        error: err,
        state: snapshot_analysis(&state.scoopee_spec, &state.scooper_spec, &analysis),
    }
}

fn snapshot_analysis(scoopee_spec: &str, scooper_spec: &str, analysis: &Analysis) -> UiAnalysis {
    let warnings = analysis
        .scoopee_warnings
        .iter()
        .map(|warning| format!("scoopee spec: {warning}"))
        .chain(
            analysis
                .scooper_warnings
                .iter()
                .map(|warning| format!("scooper spec: {warning}")),
        )
        .collect();
    UiAnalysis {
        scoopee_spec: scoopee_spec.to_string(),
        scooper_spec: scooper_spec.to_string(),
        scoopees: analysis.scoopees.groups().to_vec(),
        scoopers: analysis.scoopers.groups().to_vec(),
        sum_frequency: analysis.sum_frequency.clone(),
        scooper_effectiveness: analysis.scooper_effectiveness.clone(),
        insights: analysis.insights.clone(),
        total_combinations: analysis.total_combinations(),
        warnings,
    }
}
