//! CountryBrowser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The page is plain HTML/CSS/JS; its dynamic parts come from `crate::view`.

pub mod webview_app;
