/// OPTIONS is answered with 405, so no preflight ever succeeds. Only the
/// origin header matters: it lets same-origin and simple cross-origin
/// requests read the reply.
pub fn headers(allow_origin: &str) -> [(&'static str, &str); 1] {
    [("Access-Control-Allow-Origin", allow_origin)]
}
