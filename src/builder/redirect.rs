/// Build the self-redirecting HTML fragment for a target URL.
///
/// The fragment carries a 1-second meta refresh, an immediate
/// script-based replace, and a plain fallback link.
pub fn redirect_page(target: &str) -> String {
    format!(
        "<meta http-equiv=\"refresh\" content=\"1; url={target}\" />\
         <script>window.location.replace(\"{target}\");</script>\
         <p>You are being redirected, if you still see this page after a while \
         <a href=\"{target}\">click here</a>.</p>",
        target = target
    )
}
