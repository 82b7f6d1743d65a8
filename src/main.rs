use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    let signal_handler = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signal_handler));

    logger::log_server_start(&addr, &cfg);

    run_accept_loop(listener, state, active_connections, &signal_handler).await;

    logger::log_shutdown();
    Ok(())
}

/// Accept connections until a shutdown signal arrives.
async fn run_accept_loop(
    listener: tokio::net::TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
    signal_handler: &server::SignalHandler,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = signal_handler.shutdown.notified() => {
                // Stop accepting; in-flight connections finish in their
                // spawned tasks
                break;
            }
        }
    }
}
