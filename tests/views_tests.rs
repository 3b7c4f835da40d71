// Host-side tests for the page scenes: structure, ids the web layer relies on
// and which clicks play the button sound.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod assets {
    include!("../src/core/assets.rs");
}
mod content {
    include!("../src/core/content.rs");
}
mod projects {
    include!("../src/core/projects.rs");
}
mod routes {
    include!("../src/core/routes.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod schedule {
    include!("../src/core/schedule.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}
mod views {
    include!("../src/core/views.rs");
}

use projects::{band_instances, find_marker, PROJECTS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use routes::Route;
use scene::{Action, Element, Node, OnClick};
use scroll::Direction;

fn sky(count: usize) -> Element {
    let layers = starfield::build_layers(count, &mut StdRng::seed_from_u64(1));
    views::starfield(&layers, 0.0)
}

fn clickable(root: &Element) -> Vec<&Element> {
    root.find_all(&|e| e.on_click.is_some())
}

fn click_of<'a>(root: &'a Element, action: &Action) -> Option<&'a OnClick> {
    clickable(root)
        .into_iter()
        .filter_map(|e| e.on_click.as_ref())
        .find(|c| &c.action == action)
}

#[test]
fn starfield_has_three_layers_and_a_shooting_host() {
    let s = sky(400);
    for i in 0..3 {
        let layer = s.find_by_id(&views::star_layer_id(i)).expect("layer");
        assert_eq!(layer.style[0].1, "translateX(0px)");
    }
    assert_eq!(s.find_all(&|e| e.has_class("star")).len(), 400);
    assert!(s.find_by_id(views::SHOOTING_STARS_ID).is_some());
}

#[test]
fn starfield_layers_follow_parallax() {
    let layers = starfield::build_layers(10, &mut StdRng::seed_from_u64(1));
    let s = views::starfield(&layers, 1000.0);
    let near = s.find_by_id(&views::star_layer_id(2)).unwrap();
    assert_eq!(near.style[0].1, "translateX(-500px)");
}

#[test]
fn universe_page_renders_all_band_instances() {
    let instances = band_instances(&PROJECTS, 4200.0);
    let page = views::universe_page(sky(20), &instances, 12600.0);
    let viewport = page.find_by_id(views::VIEWPORT_ID).expect("viewport");
    let markers = viewport.find_all(&|e| e.has_class("constellation"));
    assert_eq!(markers.len(), 24);
    let band = viewport.child_elements().next().unwrap();
    assert_eq!(band.style_string(), "width: 12600px;");
    for id in [views::INSTRUCTIONS_ID, views::MODAL_HOST_ID, views::MENU_HOST_ID] {
        assert!(page.find_by_id(id).is_some(), "missing {}", id);
    }
}

#[test]
fn constellations_open_their_own_instance() {
    let instances = band_instances(&PROJECTS, 4200.0);
    let clone = instances.iter().find(|i| i.id == "wolf-clone-after").unwrap();
    let node = views::constellation(clone);
    assert_eq!(node.get_attr("data-instance"), Some("wolf-clone-after"));
    assert_eq!(node.style_string(), "left: 9600px; top: 300px;");
    let click = node.on_click.as_ref().unwrap();
    assert_eq!(click.action, Action::OpenProject("wolf-clone-after".into()));
    assert!(click.sound);
    let img = node.find_all(&|e| e.tag == "img")[0];
    assert_eq!(
        img.get_attr("src"),
        Some("/shota-portfolio/assets/constellation-wolf.png")
    );
}

#[test]
fn universe_chrome_sounds() {
    let page = views::universe_page(sky(0), &[], 12600.0);
    let back = click_of(&page, &Action::Navigate(Route::Landing)).unwrap();
    assert!(!back.sound);
    assert!(click_of(&page, &Action::OpenMenu).unwrap().sound);
    assert!(click_of(&page, &Action::Nudge(Direction::Left)).unwrap().sound);
    assert!(click_of(&page, &Action::Nudge(Direction::Right)).unwrap().sound);
}

#[test]
fn landing_button_enters_the_universe() {
    let page = views::landing_page(sky(10));
    let click = click_of(&page, &Action::Navigate(Route::Universe)).unwrap();
    assert!(click.sound);
    assert!(page.text_content().contains("UNIVERSE"));
}

#[test]
fn modal_shows_project_details() {
    let m = find_marker("bear-clone-before").unwrap();
    let modal = views::project_modal(m);
    let text = modal.text_content();
    assert!(text.contains(m.title));
    assert!(text.contains("Bear Constellation"));
    for t in m.technologies {
        assert!(text.contains(t));
    }
    let link = modal
        .find_all(&|e| e.tag == "a")
        .into_iter()
        .find(|a| a.get_attr("href") == Some(m.link))
        .expect("project link");
    assert_eq!(link.get_attr("target"), Some("_blank"));
    assert_eq!(link.get_attr("rel"), Some("noopener noreferrer"));
    assert!(link.on_click.is_none());
}

#[test]
fn every_modal_close_control_plays_sound() {
    let modal = views::project_modal(&PROJECTS[0]);
    let closes: Vec<_> = clickable(&modal)
        .into_iter()
        .filter_map(|e| e.on_click.as_ref())
        .filter(|c| c.action == Action::CloseModal)
        .collect();
    assert_eq!(closes.len(), 3);
    assert!(closes.iter().all(|c| c.sound));
}

#[test]
fn menu_links_navigate_and_backdrop_is_quiet() {
    let menu = views::menu_overlay();
    let links = menu.find_all(&|e| e.has_class("menu-link"));
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].get_attr("href"), Some("/shota-portfolio/"));
    assert_eq!(links[1].get_attr("href"), Some("/shota-portfolio/who"));
    assert_eq!(
        links[1].on_click,
        Some(OnClick {
            action: Action::Navigate(Route::Who),
            sound: true
        })
    );
    let backdrop = menu.find_all(&|e| e.has_class("backdrop"))[0];
    assert_eq!(backdrop.on_click.as_ref().map(|c| c.sound), Some(false));
}

#[test]
fn who_page_back_controls() {
    let page = views::who_page(sky(15));
    let backs: Vec<bool> = clickable(&page)
        .into_iter()
        .filter_map(|e| e.on_click.as_ref())
        .filter(|c| c.action == Action::Navigate(Route::Universe))
        .map(|c| c.sound)
        .collect();
    // corner arrow is quiet, the "Back to Universe" button is not
    assert_eq!(backs, vec![false, true]);
    assert!(page.text_content().contains("Shota Matsumoto"));
}

#[test]
fn not_found_links_home() {
    let page = views::not_found_page();
    assert!(page.text_content().contains("404"));
    let click = click_of(&page, &Action::Navigate(Route::Landing)).unwrap();
    assert!(!click.sound);
}

#[test]
fn outline_icons_use_stroke_and_filled_icons_use_fill() {
    let chevron = views::icon(content::Icon::ChevronLeft, "icon");
    assert_eq!(chevron.ns, scene::Namespace::Svg);
    assert_eq!(chevron.get_attr("fill"), Some("none"));
    assert_eq!(chevron.get_attr("stroke"), Some("currentColor"));
    let path = chevron.child_elements().next().unwrap();
    assert_eq!(path.tag, "path");
    assert!(matches!(chevron.children[0], Node::Element(_)));
}
