//! Offline Fallback Document
//!
//! The inline HTML document synthesized when a navigation fails with no
//! cached match and no pre-cached offline page. Self-contained: no
//! external stylesheets or scripts beyond the reload affordance.

use alloc::string::String;

use crate::fetch::Response;

/// The embedded offline document.
pub const OFFLINE_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Offline - Skiff</title>
  <style>
    body {
      font-family: Arial, sans-serif;
      display: flex;
      justify-content: center;
      align-items: center;
      height: 100vh;
      margin: 0;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    }
    .offline-container {
      background: white;
      padding: 40px;
      border-radius: 10px;
      text-align: center;
      box-shadow: 0 10px 30px rgba(0,0,0,0.2);
    }
    h1 { color: #333; }
    p { color: #666; }
    button {
      background: #1976d2;
      color: white;
      border: none;
      padding: 10px 20px;
      border-radius: 5px;
      cursor: pointer;
      margin-top: 20px;
    }
  </style>
</head>
<body>
  <div class="offline-container">
    <h1>&#128225; You're Offline</h1>
    <p>No internet connection</p>
    <p>Skiff needs a connection to load this page</p>
    <button onclick="location.reload()">Retry</button>
  </div>
</body>
</html>"#;

/// Build the synthesized offline response.
pub fn offline_page_response() -> Response {
    let mut response = Response::new(200).with_header("Content-Type", "text/html");
    response.body = OFFLINE_PAGE_HTML.as_bytes().to_vec();
    response.url = String::from("about:offline");
    response
}
