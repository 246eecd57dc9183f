//! WebView-based country browser using `wry` + `tao`.
//!
//! Architecture:
//! - The page shell is served through the `cb://` custom protocol; all
//!   dynamic parts are pushed into it with `window.__cb_render(payload)`.
//! - IPC from JS -> Rust via `window.ipc.postMessage()`, decoded by
//!   `ipc_handler`.
//! - Fetches run on a tokio runtime. Their results come back as user events
//!   so the browser state is only mutated from the event loop and IPC
//!   callbacks, both on the main thread.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, error, info};
use wry::WebViewBuilder;

use crate::app::App;
use crate::ipc_handler::{handle_ipc, IpcOutcome};
use crate::managers::country_browser::CountryBrowserTrait;
use crate::services::country_client::{CountrySource, RestCountriesClient};
use crate::types::browser_state::FetchTicket;
use crate::types::country::Country;
use crate::types::errors::{AppError, FetchError};
use crate::view::{render_script, LOAD_TRIGGER_LABEL};

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    FetchCompleted(FetchTicket, Result<Vec<Country>, FetchError>),
}

const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI","Noto Sans",Helvetica,Arial,sans-serif;color:#1f2328;min-height:100vh;
  background:radial-gradient(circle at 20% 20%,#d7ecff 0,#f6f8fa 45%,#eef3f7 100%);padding:32px 48px;text-align:center}
h1{font-size:40px;margin:16px 0 24px}
.countries-button{font-size:18px;padding:12px 24px;border-radius:8px;border:1px solid #1f6feb;background:#1f6feb;color:#fff;cursor:pointer}
.countries-button:hover{background:#388bfd}
.countries-grid{list-style:none;display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:16px;margin:24px 0;text-align:left}
.countries-grid li{display:flex;gap:12px;align-items:center;background:#fff;border:1px solid #d0d7de;border-radius:8px;padding:10px}
.countries-grid img{width:64px;height:40px;object-fit:cover;border:1px solid #d0d7de}
.country-name{font-weight:600}
.search-form{margin:32px auto;max-width:520px;display:flex;flex-direction:column;align-items:center;gap:12px}
.search-form .row{display:flex;gap:8px;width:100%}
.search-form input{flex:1;font-size:16px;padding:8px 12px;border:1px solid #d0d7de;border-radius:6px}
.search-form button{font-size:16px;padding:8px 16px;border-radius:6px;border:1px solid #238636;background:#238636;color:#fff;cursor:pointer}
.search-error{color:#cf222e;font-weight:600;margin:8px 0}
.country{max-width:640px;margin:16px auto;background:#fff;border:1px solid #d0d7de;border-radius:12px;padding:24px}
.country img{max-width:240px;border:1px solid #d0d7de;margin-bottom:12px}
.country p{line-height:1.6}
"#;

const PAGE_JS: &str = r#"
(function(){
  function send(cmd,extra){
    var msg=Object.assign({cmd:cmd},extra||{});
    if(window.ipc)window.ipc.postMessage(JSON.stringify(msg));
  }
  var trigger=document.getElementById('load-trigger');
  var grid=document.getElementById('countries-grid');
  var error=document.getElementById('search-error');
  var detail=document.getElementById('country-detail');
  var form=document.getElementById('search-form');
  var input=document.getElementById('search-input');
  window.__cb_render=function(s){
    trigger.style.display=s.showTrigger?'':'none';
    grid.innerHTML=s.grid;
    error.innerHTML=s.error;
    detail.innerHTML=s.detail;
    if(s.clearInput)input.value='';
  };
  trigger.addEventListener('click',function(){send('show_all')});
  input.addEventListener('input',function(e){send('search_input',{text:e.target.value})});
  form.addEventListener('submit',function(e){e.preventDefault();send('search',{text:input.value})});
  send('ui_ready');
})();
"#;

const MAGNIFIER_SVG: &str = r#"<svg width="96" height="96" viewBox="0 0 16 16" fill="currentColor" aria-label="globe with magnifier" style="color:#1f6feb"><path d="M10.68 11.74a6 6 0 0 1-7.922-8.982 6 6 0 0 1 8.982 7.922l3.04 3.04a.749.749 0 1 1-1.06 1.06l-3.04-3.04ZM11.5 7a4.499 4.499 0 1 0-8.997 0A4.499 4.499 0 0 0 11.5 7Z"/></svg>"#;

/// Static page shell. Dynamic content starts empty and arrives via `__cb_render`.
fn page_html(title: &str) -> String {
    let title = crate::view::escape_html(title);
    let mut html = String::with_capacity(PAGE_CSS.len() + PAGE_JS.len() + 2000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
    html.push_str(&title);
    html.push_str("</title><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    html.push_str(&format!("<h1>{}</h1>", title));
    html.push_str(&format!(
        "<button id=\"load-trigger\" class=\"countries-button\">{}</button>",
        LOAD_TRIGGER_LABEL
    ));
    html.push_str("<ul id=\"countries-grid\" class=\"countries-grid\"></ul>");
    html.push_str("<form id=\"search-form\" class=\"search-form\"><h2>Search country information</h2>");
    html.push_str(MAGNIFIER_SVG);
    html.push_str("<div class=\"row\"><input id=\"search-input\" type=\"text\" name=\"search-input\" placeholder=\"Enter the country name here\" autocomplete=\"off\" />");
    html.push_str("<button type=\"submit\">Search</button></div></form>");
    html.push_str("<div id=\"search-error\"></div><div id=\"country-detail\"></div>");
    html.push_str("<script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

/// Runs the fetch on the runtime and posts the result back to the event loop.
fn spawn_fetch(
    runtime: &Handle,
    client: RestCountriesClient,
    ticket: FetchTicket,
    proxy: EventLoopProxy<UserEvent>,
) {
    runtime.spawn(async move {
        let result = client.fetch_countries().await;
        if proxy.send_event(UserEvent::FetchCompleted(ticket, result)).is_err() {
            debug!(ticket = ticket.0, "event loop gone, dropping fetch result");
        }
    });
}

// ─── Main entry point ───

pub fn run(app: App) -> Result<(), AppError> {
    let runtime = Runtime::new().map_err(|e| AppError::Runtime(e.to_string()))?;
    let window_settings = app.settings().window.clone();
    let client = app.client.clone();
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&window_settings.title)
        .with_inner_size(tao::dpi::LogicalSize::new(window_settings.width, window_settings.height))
        .build(&event_loop)
        .map_err(|e| AppError::Ui(e.to_string()))?;

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let ipc_handle = runtime.handle().clone();
    let page = page_html(&window_settings.title);

    let builder = WebViewBuilder::new()
        .with_custom_protocol("cb".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page.clone().into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_url("cb://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!(body = %body.chars().take(200).collect::<String>(), "ipc");
            let Ok(mut app) = ipc_state.lock() else {
                error!("state lock poisoned");
                return;
            };
            match handle_ipc(&mut app.browser, body) {
                IpcOutcome::Render { clear_input } => {
                    let script = render_script(app.browser.state(), clear_input);
                    let _ = ipc_proxy.send_event(UserEvent::EvalScript(script));
                }
                IpcOutcome::StartFetch(ticket) => {
                    spawn_fetch(&ipc_handle, client.clone(), ticket, ipc_proxy.clone());
                }
                IpcOutcome::Nothing => {}
            }
        })
        .with_devtools(window_settings.devtools);

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| AppError::Ui("GTK vbox unavailable".to_string()))?;
        builder.build_gtk(vbox).map_err(|e| AppError::Ui(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).map_err(|e| AppError::Ui(e.to_string()))?;

    info!(title = %window_settings.title, "window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            Event::UserEvent(UserEvent::FetchCompleted(ticket, result)) => {
                let Ok(mut app) = state.lock() else {
                    error!("state lock poisoned");
                    return;
                };
                app.browser.complete_fetch(ticket, result);
                let _ = webview.evaluate_script(&render_script(app.browser.state(), false));
            }

            _ => {}
        }
    });
}
