/// Blocks the current thread until `fut` resolves.
///
/// Meant for the edges of a program (tests, `main`) where a synchronous caller
/// needs the result of a future produced by an execution context.
pub fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    futures::executor::block_on(fut)
}
