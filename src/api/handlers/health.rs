//! Liveness probe handler

/// GET /
/// Plain-text liveness line for load balancers and smoke tests
pub async fn root() -> &'static str {
    "Backend is running!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_reports_running() {
        assert_eq!(root().await, "Backend is running!");
    }
}
