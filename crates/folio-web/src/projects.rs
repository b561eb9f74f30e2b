//! Projects gallery: fetch the external collection, fall back to the bundled
//! list on any failure, and materialize one card per project.

use folio_core::{entrance_delay_secs, fallback_projects, parse_projects, Project};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::PROJECTS_CONTAINER_ID;

const PROJECTS_URL: &str = "data/projects.json";

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

pub fn load_and_render(document: web::Document) {
    spawn_local(async move {
        let projects = match fetch_projects().await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("project data unavailable ({e:?}); using bundled fallback");
                fallback_projects()
            }
        };
        if let Err(e) = render(&document, &projects) {
            log::error!("project render error: {:?}", e);
        }
    });
}

async fn fetch_projects() -> anyhow::Result<Vec<Project>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(PROJECTS_URL))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} fetching {}", resp.status(), PROJECTS_URL);
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let body = text
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("non-string response body"))?;
    Ok(parse_projects(&body)?)
}

/// Clear the container and append one card per project in source order.
pub fn render(document: &web::Document, projects: &[Project]) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(PROJECTS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PROJECTS_CONTAINER_ID}"))?;
    container.set_inner_html("");
    for (index, project) in projects.iter().enumerate() {
        let card = build_card(document, project, index).map_err(js_err)?;
        container.append_child(&card).map_err(js_err)?;
    }
    log::info!("rendered {} project cards", projects.len());
    Ok(())
}

fn build_card(
    document: &web::Document,
    project: &Project,
    index: usize,
) -> Result<web::Element, JsValue> {
    let card = document.create_element("article")?;
    card.set_class_name("project-card fade-in visible");
    if let Some(el) = card.dyn_ref::<web::HtmlElement>() {
        el.style().set_property(
            "animation-delay",
            &format!("{:.1}s", entrance_delay_secs(index)),
        )?;
    }

    let image = document.create_element("img")?;
    image.set_attribute("src", &project.image)?;
    image.set_attribute("alt", &project.title)?;
    image.set_attribute("loading", "lazy")?;

    let title = document.create_element("h3")?;
    title.set_text_content(Some(&project.title));

    let description = document.create_element("p")?;
    description.set_text_content(Some(&project.description));

    let link = document.create_element("a")?;
    link.set_attribute("href", &project.live)?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener")?;
    link.set_class_name("live-link");
    link.set_text_content(Some("Live Demo"));

    card.append_child(&image)?;
    card.append_child(&title)?;
    card.append_child(&description)?;
    card.append_child(&link)?;
    Ok(card)
}
