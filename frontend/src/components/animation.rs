use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid animation json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Header fields of a Lottie document. Layers and assets are left alone.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnimationMeta {
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl AnimationMeta {
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate <= 0.0 {
            return 0.0;
        }
        ((self.out_point - self.in_point) / self.frame_rate).max(0.0)
    }

    pub fn aspect_ratio(&self) -> String {
        format!("{} / {}", self.width.max(1), self.height.max(1))
    }
}

pub fn parse_animation(body: &str) -> Result<AnimationMeta, AssetError> {
    Ok(serde_json::from_str(body)?)
}

pub fn asset_url(src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        format!("{}{}", config::asset_base_url(), src)
    }
}

async fn fetch_animation(src: &str) -> Result<AnimationMeta, AssetError> {
    let response = Request::get(&asset_url(src)).send().await?;
    if !response.ok() {
        return Err(AssetError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_animation(&body)
}

#[derive(Properties, PartialEq)]
pub struct LottieAnimationProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder frame for a Lottie asset. Renders nothing until the asset
/// loads, and nothing at all if it fails to.
#[function_component(LottieAnimation)]
pub fn lottie_animation(props: &LottieAnimationProps) -> Html {
    let meta = use_state(|| None::<AnimationMeta>);

    {
        let meta = meta.clone();
        use_effect_with_deps(
            move |src: &AttrValue| {
                let src = src.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_animation(&src).await {
                        Ok(loaded) => {
                            log::debug!("Loaded {} ({:.1}s)", src, loaded.duration_secs());
                            meta.set(Some(loaded));
                        }
                        Err(e) => log::error!("Failed to load animation {}: {}", src, e),
                    }
                });
                || ()
            },
            props.src.clone(),
        );
    }

    match &*meta {
        Some(meta) => html! {
            <div
                class={classes!("lottie-animation", props.class.clone())}
                data-src={props.src.clone()}
                data-duration={format!("{:.2}", meta.duration_secs())}
                title={meta.name.clone().unwrap_or_default()}
                style={format!("aspect-ratio: {}; width: 100%;", meta.aspect_ratio())}
            />
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_header_and_ignores_layers() {
        let meta = parse_animation(
            r#"{"v":"5.7.4","fr":30,"ip":0,"op":90,"w":800,"h":600,"nm":"pulse","layers":[{"ty":4}]}"#,
        )
        .unwrap();
        assert_eq!(meta.name.as_deref(), Some("pulse"));
        assert_eq!(meta.width, 800);
        assert_eq!(meta.duration_secs(), 3.0);
        assert_eq!(meta.aspect_ratio(), "800 / 600");
    }

    #[test]
    fn name_is_optional() {
        let meta = parse_animation(r#"{"fr":25,"ip":10,"op":60,"w":100,"h":100}"#).unwrap();
        assert_eq!(meta.name, None);
        assert_eq!(meta.duration_secs(), 2.0);
    }

    #[test]
    fn missing_fields_are_a_decode_error() {
        assert!(matches!(parse_animation(r#"{"fr":30}"#), Err(AssetError::Decode(_))));
        assert!(matches!(parse_animation("not json"), Err(AssetError::Decode(_))));
    }

    #[test]
    fn zero_frame_rate_has_no_duration() {
        let meta = parse_animation(r#"{"fr":0,"ip":0,"op":90,"w":1,"h":1}"#).unwrap();
        assert_eq!(meta.duration_secs(), 0.0);
    }

    #[test]
    fn relative_sources_use_the_asset_base() {
        assert_eq!(asset_url("https://cdn.example/a.json"), "https://cdn.example/a.json");
        assert!(asset_url("/lottie/a.json").ends_with("/lottie/a.json"));
    }
}
