use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Admission log for one session. Timestamps are seconds since the Unix
/// epoch; every entry is inside the trailing window after each `admit` call.
#[derive(Debug, Default)]
pub struct RequestLog {
    stamps: Vec<f64>,
}

impl RequestLog {
    /// Fixed-lookback admission: prune stamps older than `window`, reject if
    /// `limit` stamps remain, otherwise record `now` and admit. Pruning
    /// happens on rejected calls too; only admitted calls append.
    pub fn admit(&mut self, now: f64, limit: usize, window: f64) -> bool {
        self.stamps.retain(|&ts| now - ts < window);
        if self.stamps.len() >= limit {
            return false;
        }
        self.stamps.push(now);
        true
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

/// Per-session rate limiting. Each session id owns an independent log, so
/// one session never observes another's admissions.
pub struct RateLimiter {
    logs: HashMap<String, RequestLog>,
    max_requests: usize,
    window_seconds: f64,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_seconds: u64) -> Self {
        Self {
            logs: HashMap::new(),
            max_requests,
            window_seconds: window_seconds as f64,
        }
    }

    /// Admission check for `session` against the wall clock.
    pub fn check(&mut self, session: &str) -> bool {
        self.check_at(session, unix_now())
    }

    pub fn check_at(&mut self, session: &str, now: f64) -> bool {
        self.logs
            .entry(session.to_string())
            .or_default()
            .admit(now, self.max_requests, self.window_seconds)
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
