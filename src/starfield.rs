use crate::core::{ShootingStars, StarfieldCache};
use crate::core::views;
use crate::core::{Element, Node};
use crate::dom::{self, Dispatch};
use rand::rngs::StdRng;
use smallvec::SmallVec;
use std::rc::Rc;
use web_sys as web;

/// Scene for a starfield of `star_count` stars; layers come from the cache so
/// they survive re-renders with the same count.
pub fn sky_scene(cache: &mut StarfieldCache, star_count: usize, rng: &mut StdRng) -> Element {
    views::starfield(cache.layers(star_count, rng), 0.0)
}

/// Live starfield bound to a mounted page: moves the layers with the scroll
/// position and keeps the shooting-star host in sync with the spawner.
pub struct StarfieldView {
    document: web::Document,
    layers: SmallVec<[(web::HtmlElement, f64); 3]>,
    shooting_host: web::Element,
    shooting: ShootingStars,
    rng: StdRng,
    quiet: Dispatch,
}

impl StarfieldView {
    pub fn attach(
        document: &web::Document,
        speeds: &[f64],
        now_ms: f64,
        rng: StdRng,
    ) -> anyhow::Result<Self> {
        let mut layers = SmallVec::new();
        for (i, &speed) in speeds.iter().enumerate() {
            let el = dom::html_element_by_id(document, &views::star_layer_id(i))?;
            layers.push((el, speed));
        }
        let shooting_host = dom::element_by_id(document, views::SHOOTING_STARS_ID)?;
        let mut shooting = ShootingStars::new();
        shooting.start(now_ms);
        Ok(Self {
            document: document.clone(),
            layers,
            shooting_host,
            shooting,
            rng,
            quiet: Rc::new(|_| {}),
        })
    }

    pub fn set_parallax(&self, parallax_offset: f64) {
        for (el, speed) in &self.layers {
            let x = crate::core::starfield::layer_offset_x(parallax_offset, *speed);
            _ = el.style().set_property("transform", &views::translate_x(x));
        }
    }

    pub fn tick(&mut self, now_ms: f64) {
        if !self.shooting.tick(now_ms, &mut self.rng) {
            return;
        }
        let node: Node = crate::core::scene::el("div")
            .children(self.shooting.active().into_iter().map(views::shooting_star))
            .into();
        // shooting stars carry no handlers, the listener list stays empty
        if let Err(e) = dom::mount_into(&self.document, &self.shooting_host, &node, &self.quiet) {
            log::warn!("[stars] render error: {:?}", e);
        }
    }

    /// Cancel pending spawns and removals.
    pub fn stop(&mut self) {
        self.shooting.stop();
        self.shooting_host.set_inner_html("");
    }
}

impl Drop for StarfieldView {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn layer_speeds() -> [f64; 3] {
    crate::core::constants::STAR_LAYERS.map(|(_, speed, ..)| speed)
}
