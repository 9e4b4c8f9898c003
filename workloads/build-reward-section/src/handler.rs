//! Spin HTTP component serving the section page.

use spin_sdk::http::{IntoResponse, Method, Request, Response};
use spin_sdk::http_component;

use crate::config::SectionConfig;
use crate::render_page;
use crate::request::request_id_or_generate;

/// Spin variables read into [`SectionConfig`].
const CONFIG_KEYS: [&str; 3] = ["asset_base", "log_format", "cache_max_age"];

#[http_component]
fn handle_build_reward(req: Request) -> anyhow::Result<impl IntoResponse> {
    if *req.method() != Method::Get {
        return Ok(Response::builder()
            .status(405)
            .body("Method Not Allowed")
            .build());
    }

    let config = load_config()?;
    let request_id = request_id_or_generate(req.header("x-request-id").and_then(|h| h.as_str()));

    tracing::info!(path = req.path(), request_id = %request_id, "rendering section page");

    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("cache-control", config.cache_control())
        .header("x-request-id", request_id)
        .body(render_page(&config))
        .build())
}

/// Read configuration from Spin variables. Unset variables keep defaults.
fn load_config() -> anyhow::Result<SectionConfig> {
    let values: Vec<(&str, String)> = CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            spin_sdk::variables::get(key)
                .ok()
                .map(|value| (*key, value))
        })
        .collect();

    let config = SectionConfig::from_pairs(values.iter().map(|(k, v)| (*k, v.as_str())))?;
    Ok(config)
}
