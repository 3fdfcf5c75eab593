//! Record ids: decimal millisecond timestamps, strictly increasing within a
//! process.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// A fresh id for a collection in which `taken` reports the ids already in
/// use.
///
/// Starts from the current time in milliseconds, moves past the last id this
/// process handed out, then past any id `taken` rejects.
pub fn next_id(taken: impl Fn(&str) -> bool) -> String {
  let mut candidate = issue(Utc::now().timestamp_millis());
  loop {
    let id = candidate.to_string();
    if !taken(&id) {
      return id;
    }
    candidate = issue(candidate + 1);
  }
}

fn issue(floor: i64) -> i64 {
  let mut last = LAST_ISSUED.load(Ordering::SeqCst);
  loop {
    let next = floor.max(last + 1);
    match LAST_ISSUED.compare_exchange_weak(
      last,
      next,
      Ordering::SeqCst,
      Ordering::SeqCst,
    ) {
      Ok(_) => return next,
      Err(actual) => last = actual,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_strictly_increase() {
    let a: i64 = next_id(|_| false).parse().unwrap();
    let b: i64 = next_id(|_| false).parse().unwrap();
    let c: i64 = next_id(|_| false).parse().unwrap();
    assert!(a < b && b < c);
  }

  #[test]
  fn skips_taken_ids() {
    let floor: i64 = next_id(|_| false).parse().unwrap();
    let blocked = [(floor + 1).to_string(), (floor + 2).to_string()];
    let id = next_id(|candidate| blocked.iter().any(|b| b == candidate));
    assert!(!blocked.contains(&id));
  }
}
