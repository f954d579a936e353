// Shared helpers for the integration tests in `tests/`.
#![allow(dead_code)]

pub mod fixtures;

pub mod helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ufr_rgb::Result;
    use ufr_rgb::config::Config;
    use ufr_rgb::session::run_console;
    use ufr_rgb::terminal::ScriptedTerminal;
    use ufr_rgb::test_support::shared_mock;
    use ufr_rgb::transport::MockTransport;

    pub use ufr_rgb::test_support::initialized_mock_device;

    /// Outcome of a full console run against a mock reader.
    pub struct Run {
        pub result: Result<()>,
        pub mock: Rc<RefCell<MockTransport>>,
        pub output: String,
    }

    /// Run the whole console lifecycle on `mock` with the scripted terminal.
    pub fn run_with(mock: MockTransport, terminal: &mut ScriptedTerminal) -> Run {
        run_with_config(mock, &super::fixtures::quick_config(), terminal)
    }

    /// Same as `run_with` but with an explicit config.
    pub fn run_with_config(
        mock: MockTransport,
        config: &Config,
        terminal: &mut ScriptedTerminal,
    ) -> Run {
        let (mock, boxed) = shared_mock(mock);
        let mut out = Vec::new();
        let result = run_console(move || Ok(boxed), config, terminal, &mut out);
        Run {
            result,
            mock,
            output: String::from_utf8_lossy(&out).into_owned(),
        }
    }
}
