use anime_finder::{Config, run};

fn main() -> anyhow::Result<()> {
    // a broken config is reported by run() with full context
    let worker_threads = Config::load().map_or(2, |config| config.general.worker_threads);

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    builder.build()?.block_on(run())
}
