/// ANY /healthz: liveness probe for the orchestrator.
pub async fn healthz() -> &'static str {
    "OK"
}
