use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;

/// Builds the tracing stack: env-filter, pretty stdout, an hourly rolling
/// file under ./logs, and a JSON stdout layer outside of debug mode. The
/// guard must stay alive for the file writer to flush.
pub fn get_subscriber(debug: bool) -> (impl tracing::Subscriber + Send + Sync, WorkerGuard) {
    let default_filter = if debug { "trace" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let json_log = (!debug).then(|| tracing_subscriber::fmt::layer().json());

    let file_appender = tracing_appender::rolling::hourly("./logs", "flowfirmer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer().with_writer(non_blocking);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(json_log)
        .with(file_log);

    (subscriber, guard)
}

pub fn init_subscriber(debug: bool) -> WorkerGuard {
    let (subscriber, guard) = get_subscriber(debug);
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
    guard
}
