/// Install SIGINT/SIGTERM handlers and spawn a task that exits the
/// process with status 0 when either arrives.
///
/// Handlers are registered before this returns, so a signal delivered
/// before the task first runs is still caught. The exit is immediate: an
/// in-flight cycle is abandoned mid-page.
#[cfg(unix)]
pub fn spawn_watcher() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => {},
            _ = terminate.recv() => {},
        }
        exit_on_signal();
    });
    Ok(())
}

#[cfg(not(unix))]
pub fn spawn_watcher() -> std::io::Result<()> {
    tokio::spawn(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => exit_on_signal(),
            Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
        }
    });
    Ok(())
}

fn exit_on_signal() -> ! {
    tracing::info!("Received signal, exiting...");
    std::process::exit(0);
}
