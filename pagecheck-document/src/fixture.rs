//! The fixture page.

/// The page under validation, captured as served.
///
/// Every check in this crate runs against this string by default, but all of
/// them take the document as an argument so a different capture can be
/// checked the same way.
pub const SAMPLE_PAGE: &str = "<!doctype html><html><head><title>Example Domain</title> <meta charset=utf-8 /> <meta http-equiv=Content-type content=text/html; charset=utf-8 /> <meta name=viewport content=width=device-width, initial-scale=1 /> <style type=text/css> body { background-color: #f0f0f2; margin: 0; padding: 0; font-family: -apple-system, system-ui BlinkMacSystemFont, Segoe UI, Open Sans, Helvetica Neue, Helvetica, Arial, sans-serif;} div { width: 600px; margin: 5em auto; padding: 2em;        background-color: #fdfdff; border-radius: 0.5em; box-shadow: 2px 3px 7px 2px rgba(0,0,0,0.02); } a:link, a:visited { color: #38488f; text-decoration: none; } @media (max-width: 700px) { div { margin: 0 auto; width: auto; } } </style> <meta name=NetsparkQuiltingResult total-length=1256 removed=0 rules-found=w3669,w3089,w2339,w3070,w4908 /></head><body><div> <h1>Example Domain</h1> <p>This domain is for use in illustrative examples in documents. You may use this domain in literature without prior coordination or asking for permission.</p> <p><a href=https://www.iana.org/domains/example>More information...</a></></div></body></html>";
