/// Runs synchronous work (parsing, validation) on the calling thread.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
