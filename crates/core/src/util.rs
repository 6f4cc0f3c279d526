/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns its value. The
/// log level defaults to `Debug`. The calling crate needs `log` as a
/// dependency.
///
/// ```
/// let tiles = hexmap::timed!(
///     "Ring generation",
///     hexmap::shape::ring(hexmap::CubeCoordinate::ORIGIN, 10)
/// );
/// assert_eq!(tiles.len(), 60);
/// ```
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}
