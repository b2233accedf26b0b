use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this more than once
/// is harmless; later calls return false.
pub fn init(default_filter: &str) -> bool {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(default_filter))
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .try_init()
    .is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_init_is_idempotent() {
    let _ = init("warn");
    assert!(!init("debug"));
  }

  #[test]
  fn test_bad_filter_falls_back() {
    // Must not panic on an unparsable directive
    let _ = init("plan_builder=[[");
  }
}
