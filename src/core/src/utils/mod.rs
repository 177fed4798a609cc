use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Run `action` and return its result together with the elapsed wall
    /// time in milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}
