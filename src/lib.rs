pub mod app;
pub mod calculator;
pub mod helpers;
pub mod model;

pub use calculator::calculate;
pub use model::{InvalidInput, MixInput, MixResult};

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use test_context::TestContext;

    static INIT_LOGGER: Once = Once::new();

    pub struct UsingLogger;

    impl TestContext for UsingLogger {
        fn setup() -> UsingLogger {
            INIT_LOGGER.call_once(|| {
                env_logger::init();
            });

            UsingLogger
        }

        fn teardown(self) {}
    }
}
