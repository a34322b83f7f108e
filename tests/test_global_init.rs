mod shared;

use shared::{assert_output, emit_all, parse_flags};
use tracing_cli_adapter::exceptions::LoggerError;

// Installs a global default; keep this the only test in this binary.
#[test]
fn test_init_installs_global_default_once() {
    let (generator, writer) = parse_flags(&["--quiet"]);
    let logger = generator.logger();

    logger.init().expect("first installation succeeds");
    emit_all();
    assert_output(&writer.read_and_reset(), "warn", false);

    let err = logger.init().expect_err("second installation fails");
    assert!(matches!(err, LoggerError::GlobalDefault(_)));
}
