/// Answers every request, regardless of method, path, headers, or body.
pub async fn greet() -> &'static str {
    "Hello World!"
}
