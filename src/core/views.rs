use super::assets::resolve_asset_path;
use super::content::{self, Icon};
use super::projects::{BandInstance, ProjectMarker};
use super::routes::Route;
use super::scene::{el, svg, Action, Element};
use super::scroll::Direction;
use super::starfield::{ShootingStar, StarLayer};

// Element ids the web layer looks up after mounting a page.
pub const VIEWPORT_ID: &str = "universe-viewport";
pub const INSTRUCTIONS_ID: &str = "universe-instructions";
pub const MODAL_HOST_ID: &str = "modal-host";
pub const MENU_HOST_ID: &str = "menu-host";
pub const SHOOTING_STARS_ID: &str = "shooting-stars";

#[inline]
pub fn star_layer_id(index: usize) -> String {
    format!("star-layer-{}", index)
}

#[inline]
pub fn translate_x(px: f64) -> String {
    // + 0.0 turns -0 into 0 so an unscrolled layer prints "0px"
    format!("translateX({}px)", px + 0.0)
}

pub fn icon(glyph: Icon, class: &str) -> Element {
    let path = svg("path").attr("d", glyph.path());
    let (fill, path) = if glyph.is_filled() {
        ("currentColor", path)
    } else {
        (
            "none",
            path.attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2"),
        )
    };
    let root = svg("svg")
        .class(class)
        .attr("fill", fill)
        .attr("viewBox", "0 0 24 24");
    let root = if glyph.is_filled() {
        root
    } else {
        root.attr("stroke", "currentColor")
    };
    root.child(path)
}

// ---------------- Starfield ----------------

/// Background sky: nebula washes plus one translated div per star layer and
/// an empty host for shooting stars.
pub fn starfield(layers: &[StarLayer], parallax_offset: f64) -> Element {
    let nebulae = el("div").class("nebula-container").children(
        ["nebula-slow", "nebula-medium", "nebula-fast"]
            .iter()
            .map(|n| el("div").class("nebula").class(n)),
    );
    let layer_nodes = layers.iter().enumerate().map(|(i, layer)| {
        el("div")
            .id(star_layer_id(i))
            .class("star-layer")
            .style("transform", translate_x(layer.offset_x(parallax_offset)))
            .children(layer.stars.iter().map(|s| {
                let (color, glow) = if s.is_bright() {
                    (
                        "hsl(200 90% 85%)",
                        format!("0 0 {}px hsl(200 90% 70% / 0.6)", s.size * 3.0),
                    )
                } else {
                    (
                        "hsl(210 40% 98%)",
                        format!("0 0 {}px hsl(210 40% 98% / 0.4)", s.size * 2.0),
                    )
                };
                el("div")
                    .class("star twinkle")
                    .style("left", format!("{}%", s.x))
                    .style("top", format!("{}%", s.y))
                    .style("width", format!("{}px", s.size))
                    .style("height", format!("{}px", s.size))
                    .style("opacity", format!("{}", s.opacity))
                    .style("background-color", color)
                    .style("box-shadow", glow)
                    .style("animation-delay", format!("{}s", s.twinkle_delay_sec))
                    .style("animation-duration", format!("{}s", s.twinkle_speed_sec))
            }))
    });
    el("div")
        .class("starfield")
        .child(nebulae)
        .child(el("div").class("nebula nebula-base"))
        .children(layer_nodes)
        .child(el("div").id(SHOOTING_STARS_ID).class("shooting-stars"))
}

pub fn shooting_star(star: &ShootingStar) -> Element {
    el("div")
        .class("shooting-star")
        .style("left", format!("{}%", star.start_x))
        .style("top", format!("{}%", star.start_y))
        .style("transform", format!("rotate({}deg)", star.angle_deg))
        .child(
            el("div")
                .class("shooting-star-body")
                .style("animation-duration", format!("{}s", star.duration_sec))
                .child(el("div").class("shooting-star-core"))
                .child(el("div").class("shooting-star-tail")),
        )
}

// ---------------- Pages ----------------

fn round_button(icon_kind: Icon, class: &str) -> Element {
    el("button")
        .class("round-button")
        .class(class)
        .attr("type", "button")
        .child(icon(icon_kind, "icon"))
}

fn wordmark() -> Element {
    el("span")
        .text(content::SITE_OWNER)
        .child(
            el("span")
                .class("text-primary")
                .text(format!(" {}", content::SITE_TITLE)),
        )
}

pub fn landing_page(sky: Element) -> Element {
    el("div").class("page page-landing").child(sky).child(
        el("div")
            .class("landing-content fade-up")
            .child(
                el("h1")
                    .class("landing-title")
                    .child(el("span").text(content::SITE_OWNER))
                    .child(el("br"))
                    .child(el("span").class("text-gold").text(content::SITE_TITLE)),
            )
            .child(el("p").class("landing-welcome").text(content::WELCOME_TEXT))
            .child(
                el("button")
                    .class("btn btn-cosmos btn-xl")
                    .attr("type", "button")
                    .on_click(Action::Navigate(Route::Universe))
                    .text("Start Exploring My Universe"),
            ),
    )
}

/// A project marker at its band position.
pub fn constellation(instance: &BandInstance) -> Element {
    let m = instance.marker;
    el("div")
        .class("constellation")
        .attr("data-instance", instance.id.as_str())
        .style("left", format!("{}px", instance.position.x))
        .style("top", format!("{}px", instance.position.y))
        .on_click(Action::OpenProject(instance.id.clone()))
        .child(el("div").class("constellation-glow"))
        .child(
            el("img")
                .class("constellation-image float")
                .attr("src", resolve_asset_path(m.image))
                .attr("alt", m.name)
                .attr("draggable", "false"),
        )
        .child(
            el("div")
                .class("constellation-label")
                .child(el("span").text(m.name)),
        )
        .child(
            el("div")
                .class("constellation-hint")
                .child(el("span").text("Click to view")),
        )
}

fn instructions() -> Element {
    el("div").id(INSTRUCTIONS_ID).class("instructions").child(
        el("div")
            .class("instructions-body")
            .child(
                el("div")
                    .class("instructions-icons")
                    .child(icon(Icon::ChevronLeft, "icon"))
                    .child(el("div").class("instructions-dot"))
                    .child(icon(Icon::ChevronRight, "icon")),
            )
            .child(el("p").class("instructions-lead").text(content::INSTRUCTIONS[0]))
            .child(el("p").class("text-muted").text(content::INSTRUCTIONS[1]))
            .child(el("p").class("text-muted").text(content::INSTRUCTIONS[2])),
    )
}

/// Universe page. `band_width` is the width of all three bands together.
pub fn universe_page(sky: Element, instances: &[BandInstance], band_width: f64) -> Element {
    el("div")
        .class("page page-universe")
        .child(sky)
        .child(
            round_button(Icon::ArrowLeft, "corner-top-left")
                .on_click_quiet(Action::Navigate(Route::Landing)),
        )
        .child(
            el("button")
                .class("menu-button")
                .attr("type", "button")
                .on_click(Action::OpenMenu)
                .child(icon(Icon::Menu, "icon"))
                .child(el("span").class("menu-button-label").text("Menu")),
        )
        .child(instructions())
        .child(
            round_button(Icon::ChevronLeft, "nudge nudge-left")
                .on_click(Action::Nudge(Direction::Left)),
        )
        .child(
            round_button(Icon::ChevronRight, "nudge nudge-right")
                .on_click(Action::Nudge(Direction::Right)),
        )
        .child(
            el("div")
                .id(VIEWPORT_ID)
                .class("viewport hide-scrollbar")
                .child(
                    el("div")
                        .class("band")
                        .style("width", format!("{}px", band_width))
                        .children(instances.iter().map(constellation)),
                ),
        )
        .child(el("div").id(MODAL_HOST_ID))
        .child(el("div").id(MENU_HOST_ID))
        .child(el("div").class("wordmark").child(wordmark()))
}

pub fn project_modal(project: &ProjectMarker) -> Element {
    let details = el("div")
        .class("modal-details slide-in-left")
        .child(
            el("span")
                .class("modal-kicker")
                .text(format!("{} Constellation", project.name)),
        )
        .child(el("h2").class("modal-title").text(project.title))
        .child(el("p").class("modal-description").text(project.description))
        .child(
            el("div").class("chips").children(
                project
                    .technologies
                    .iter()
                    .map(|t| el("span").class("chip").text(*t)),
            ),
        )
        .child(
            el("a")
                .class("btn btn-cosmos btn-lg")
                .attr("href", project.link)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text("View Project")
                .child(icon(Icon::ExternalLink, "icon-sm")),
        );
    let picture = el("div")
        .class("modal-picture slide-in-right")
        .child(
            el("img")
                .attr("src", resolve_asset_path(project.image))
                .attr("alt", project.title),
        )
        .child(el("div").class("modal-picture-fade"));

    el("div")
        .class("modal-root")
        .child(
            el("div")
                .class("backdrop fade-in")
                .on_click(Action::CloseModal),
        )
        .child(
            el("div").class("modal-frame pop-in").child(
                el("div")
                    .class("modal-card")
                    .child(round_button(Icon::Close, "modal-close").on_click(Action::CloseModal))
                    .child(el("div").class("modal-content").child(details).child(picture))
                    .child(
                        el("div").class("modal-back-mobile").child(
                            el("button")
                                .class("btn btn-cosmos-outline")
                                .attr("type", "button")
                                .on_click(Action::CloseModal)
                                .text("Back to Universe"),
                        ),
                    ),
            ),
        )
}

pub fn menu_overlay() -> Element {
    let items = [
        ("Home", Route::Landing, Icon::Home),
        ("Who", Route::Who, Icon::User),
    ];
    el("div")
        .class("menu-root")
        .child(
            el("div")
                .class("backdrop backdrop-strong fade-in")
                .on_click_quiet(Action::CloseMenu),
        )
        .child(
            el("div")
                .class("menu-panel fade-in")
                .child(round_button(Icon::Close, "menu-close").on_click(Action::CloseMenu))
                .child(el("nav").class("menu-nav").children(
                    items.into_iter().enumerate().map(|(i, (label, route, glyph))| {
                        el("a")
                            .class("menu-link fade-up")
                            .style("animation-delay", format!("{}s", i as f64 * 0.1))
                            .attr("href", route.href())
                            .on_click(Action::Navigate(route))
                            .child(icon(glyph, "menu-link-icon"))
                            .text(label)
                    }),
                )),
        )
}

pub fn who_page(sky: Element) -> Element {
    let hero = el("section")
        .class("who-hero")
        .child(
            el("div").class("who-photo slide-in-left").child(
                el("div")
                    .class("who-photo-frame")
                    .child(
                        el("div").class("who-photo-clip glow-gold").child(
                            el("img")
                                .attr("src", resolve_asset_path(content::PROFILE_PHOTO))
                                .attr("alt", "Profile Photo"),
                        ),
                    )
                    .child(el("div").class("who-photo-ring pulse-glow")),
            ),
        )
        .child(
            el("div")
                .class("who-intro slide-in-right")
                .child(
                    el("h1")
                        .class("who-title")
                        .child(el("span").text("Hey, I'm"))
                        .child(el("br"))
                        .child(el("span").class("text-gold").text(content::FULL_NAME)),
                )
                .child(el("p").class("who-lead").text(content::BIO_PARAGRAPHS[0]))
                .child(el("p").class("text-muted").text(content::BIO_PARAGRAPHS[1])),
        );

    let skills = el("div")
        .class("who-skills fade-up")
        .child(
            el("h2")
                .class("section-title")
                .text("Skills & ")
                .child(el("span").class("text-primary").text("Expertise")),
        )
        .child(el("div").class("skill-grid").children(content::SKILLS.iter().map(|g| {
            el("div")
                .class("card")
                .child(el("h3").class("card-title").text(g.category))
                .child(
                    el("div")
                        .class("chips")
                        .children(g.items.iter().map(|s| el("span").class("chip").text(*s))),
                )
        })));

    let contact = el("div")
        .class("who-contact fade-up")
        .child(
            el("h2")
                .class("section-title")
                .text("Get in ")
                .child(el("span").class("text-primary").text("Touch")),
        )
        .child(
            el("div")
                .class("card card-roomy")
                .child(el("p").class("text-muted").text(content::CONTACT_BLURB))
                .child(el("div").class("socials").children(content::SOCIAL_LINKS.iter().map(
                    |l| {
                        el("a")
                            .class("social")
                            .attr("href", l.href)
                            .attr("title", l.name)
                            .child(icon(l.icon, "icon-sm"))
                    },
                )))
                .child(
                    el("a")
                        .class("btn btn-cosmos btn-lg btn-block")
                        .attr("href", format!("mailto:{}", content::CONTACT_EMAIL))
                        .child(icon(Icon::Mail, "icon-sm"))
                        .text("Send me a message"),
                ),
        )
        .child(
            el("div").class("who-back").child(
                el("button")
                    .class("btn btn-cosmos-outline btn-lg")
                    .attr("type", "button")
                    .on_click(Action::Navigate(Route::Universe))
                    .child(icon(Icon::ArrowLeft, "icon-sm"))
                    .child(el("span").text("Back to Universe")),
            ),
        );

    el("div")
        .class("page page-who")
        .child(sky)
        .child(
            round_button(Icon::ArrowLeft, "corner-top-left")
                .on_click_quiet(Action::Navigate(Route::Universe)),
        )
        .child(
            el("div")
                .class("who-content")
                .child(hero)
                .child(el("section").class("who-details").child(skills).child(contact)),
        )
}

pub fn not_found_page() -> Element {
    el("div").class("page page-not-found").child(
        el("div")
            .class("not-found")
            .child(el("h1").text("404"))
            .child(el("p").class("text-muted").text("Oops! Page not found"))
            .child(
                el("a")
                    .class("link")
                    .attr("href", Route::Landing.href())
                    .on_click_quiet(Action::Navigate(Route::Landing))
                    .text("Return to Home"),
            ),
    )
}
