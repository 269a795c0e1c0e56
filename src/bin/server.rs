// HTTP service exposing the optimizer as a JSON endpoint.
//
// POST /run-optimization        one Row        -> RowOutcome
// POST /run-batch-optimization  list of Rows   -> list of RowOutcomes
//
// Batch processing skips rows that fail; single-row requests report the
// failure as a 400 response.

use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use tiny_http::{Header, Method, Request, Response, Server};

use budgetopt::batch::{process_row, run_batch, BatchConfig};
use budgetopt::simulation::SimulationConfig;
use budgetopt::{OptimizerConfig, Row};

#[derive(Debug, Parser)]
#[command(name = "budgetopt-server", about = "Budget allocation HTTP service", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    listen: String,

    /// Monte Carlo iterations per department.
    #[arg(long, default_value_t = 3000)]
    iterations: usize,

    /// Deterministic base seed. Omitted: OS entropy per request.
    #[arg(long)]
    seed: Option<u64>,

    /// Reject rows with negative or non-finite fields.
    #[arg(long)]
    validate: bool,
}

fn json_response(status: u16, body: String) -> Response<std::io::Cursor<Vec<u8>>> {
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header is valid");
    Response::from_string(body).with_status_code(status).with_header(header)
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn handle(request: &mut Request, args: &Args) -> (u16, String) {
    if *request.method() != Method::Post {
        return (405, error_body("only POST is supported"));
    }

    let mut body = String::new();
    if let Err(err) = request.as_reader().read_to_string(&mut body) {
        return (400, error_body(&format!("unreadable body: {err}")));
    }

    let sim_config = SimulationConfig::default()
        .with_iterations(args.iterations)
        .with_validation(args.validate);
    let opt_config = OptimizerConfig::default();

    match request.url() {
        "/run-optimization" => {
            let row: Row = match serde_json::from_str(&body) {
                Ok(row) => row,
                Err(err) => return (400, error_body(&format!("invalid row: {err}"))),
            };
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            match process_row(&row, &sim_config, &opt_config, &mut rng) {
                Ok(outcome) => match serde_json::to_string(&outcome) {
                    Ok(json) => (200, json),
                    Err(err) => (500, error_body(&err.to_string())),
                },
                Err(err) => (400, error_body(&err.to_string())),
            }
        }
        "/run-batch-optimization" => {
            let rows: Vec<Row> = match serde_json::from_str(&body) {
                Ok(rows) => rows,
                Err(err) => return (400, error_body(&format!("invalid row list: {err}"))),
            };
            let config = BatchConfig {
                simulation: sim_config,
                optimizer: opt_config,
                seed: args.seed,
            };
            let outcomes = run_batch(&rows, &config);
            match serde_json::to_string(&outcomes) {
                Ok(json) => (200, json),
                Err(err) => (500, error_body(&err.to_string())),
            }
        }
        _ => (404, error_body("unknown endpoint")),
    }
}

fn main() {
    let args = Args::parse();
    let _ = TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let server = match Server::http(&args.listen) {
        Ok(server) => server,
        Err(err) => {
            eprintln!("Error: failed to bind {}: {err}", args.listen);
            process::exit(1);
        }
    };
    log::info!("listening on http://{}", args.listen);

    for mut request in server.incoming_requests() {
        let (status, body) = handle(&mut request, &args);
        if status >= 400 {
            log::warn!("{} {} -> {status}", request.method(), request.url());
        }
        if let Err(err) = request.respond(json_response(status, body)) {
            log::warn!("failed to send response: {err}");
        }
    }
}
