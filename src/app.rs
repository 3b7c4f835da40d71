use crate::audio::AudioSession;
use crate::constants::{LANDING_STAR_COUNT, UNIVERSE_STAR_COUNT, WHO_STAR_COUNT};
use crate::core::constants::SECTION_WIDTH;
use crate::core::keys::KeyContext;
use crate::core::{
    band_instances, find_marker, views, Action, Direction, OnClick, Route, StarfieldCache, PROJECTS,
};
use crate::dom::{self, js_err, Dispatch, Listener};
use crate::events;
use crate::frame::{self, FrameLoop};
use crate::overlay::Overlay;
use crate::starfield::{self, StarfieldView};
use crate::universe::UniverseView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Live handles of the current page. Field order is drop order: the frame
/// loop goes first so nothing ticks a half-dropped page.
struct MountedPage {
    _frame: Option<FrameLoop>,
    modal: Option<Overlay>,
    menu: Option<Overlay>,
    universe: Option<Rc<UniverseView>>,
    _sky: Option<Rc<RefCell<StarfieldView>>>,
    _listeners: Vec<Listener>,
    route: Route,
}

pub struct App {
    document: web::Document,
    root: web::Element,
    audio: Rc<AudioSession>,
    stars: StarfieldCache,
    rng: StdRng,
    dispatch: Dispatch,
    page: Option<MountedPage>,
    _globals: Vec<Listener>,
}

/// Click dispatch that applies actions on a later task, after the handler
/// that fired has returned. A page swap can then drop that handler safely.
fn deferred_dispatch(app: Weak<RefCell<App>>) -> Dispatch {
    Rc::new(move |click: OnClick| {
        let app = app.clone();
        spawn_local(async move {
            if let Some(app) = app.upgrade() {
                App::apply(&app, click);
            }
        });
    })
}

impl App {
    pub fn create(document: &web::Document, root_id: &str) -> anyhow::Result<Rc<RefCell<Self>>> {
        let root = dom::element_by_id(document, root_id)?;
        let audio = AudioSession::create(document)?;
        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            RefCell::new(App {
                document: document.clone(),
                root,
                audio,
                stars: StarfieldCache::default(),
                rng: StdRng::from_entropy(),
                dispatch: deferred_dispatch(weak.clone()),
                page: None,
                _globals: Vec::new(),
            })
        });
        let globals = Self::wire_globals(&app)?;
        app.borrow_mut()._globals = globals;
        Ok(app)
    }

    fn wire_globals(app: &Rc<RefCell<Self>>) -> anyhow::Result<Vec<Listener>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let (document, dispatch) = {
            let a = app.borrow();
            (a.document.clone(), a.dispatch.clone())
        };
        let mut out = Vec::with_capacity(3);

        let weak = Rc::downgrade(app);
        out.push(events::wire_global_keydown(
            &document,
            move || {
                let app = weak.upgrade()?;
                let ctx = app.borrow().key_context();
                ctx
            },
            dispatch,
        )?);

        // back/forward buttons
        let weak = Rc::downgrade(app);
        out.push(Listener::new(&window, "popstate", move |_ev| {
            let Some(app) = weak.upgrade() else {
                return;
            };
            let route = current_route();
            if let Err(e) = App::navigate(&app, route, false) {
                log::error!("[route] popstate navigation failed: {:?}", e);
            }
        })?);

        let weak = Rc::downgrade(app);
        out.push(Listener::new(&window, "pagehide", move |_ev| {
            if let Some(app) = weak.upgrade() {
                app.borrow().audio.teardown();
            }
        })?);
        Ok(out)
    }

    fn key_context(&self) -> Option<KeyContext> {
        let page = self.page.as_ref()?;
        Some(KeyContext {
            on_universe: page.route == Route::Universe,
            modal_open: page.modal.as_ref().is_some_and(Overlay::is_open),
            menu_open: page.menu.as_ref().is_some_and(Overlay::is_open),
        })
    }

    pub fn apply(app: &Rc<RefCell<Self>>, click: OnClick) {
        if click.sound {
            app.borrow().audio.play_click();
        }
        let result = match click.action {
            Action::Navigate(route) => Self::navigate(app, route, true),
            Action::OpenProject(id) => app.borrow_mut().open_project(&id),
            Action::CloseModal => {
                app.borrow_mut().close_overlays(true, false);
                Ok(())
            }
            Action::OpenMenu => app.borrow_mut().open_menu(),
            Action::CloseMenu => {
                app.borrow_mut().close_overlays(false, true);
                Ok(())
            }
            Action::Nudge(direction) => {
                app.borrow().nudge(direction);
                Ok(())
            }
        };
        if let Err(e) = result {
            log::error!("[app] action failed: {:?}", e);
        }
    }

    /// Swap the mounted page for `route`. `push` records a history entry;
    /// popstate navigations pass false.
    pub fn navigate(app: &Rc<RefCell<Self>>, route: Route, push: bool) -> anyhow::Result<()> {
        if push {
            let history = web::window()
                .ok_or_else(|| anyhow::anyhow!("no window"))?
                .history()
                .map_err(js_err)?;
            history
                .push_state_with_url(&JsValue::NULL, "", Some(&route.href()))
                .map_err(js_err)?;
        }
        app.borrow_mut().mount(route)
    }

    pub fn mount(&mut self, route: Route) -> anyhow::Result<()> {
        // tear down first so the old page's ids are gone before the new render
        self.page = None;
        if let Route::NotFound(path) = &route {
            log::error!(
                "[route] 404 Error: User attempted to access non-existent route: {}",
                path
            );
        } else {
            log::info!("[route] {}", route.path());
        }

        let star_count = match route {
            Route::Landing => Some(LANDING_STAR_COUNT),
            Route::Universe => Some(UNIVERSE_STAR_COUNT),
            Route::Who => Some(WHO_STAR_COUNT),
            Route::NotFound(_) => None,
        };
        let sky = star_count.map(|n| starfield::sky_scene(&mut self.stars, n, &mut self.rng));
        let scene = match (&route, sky) {
            (Route::Landing, Some(sky)) => views::landing_page(sky),
            (Route::Universe, Some(sky)) => {
                let instances = band_instances(&PROJECTS, SECTION_WIDTH);
                views::universe_page(sky, &instances, SECTION_WIDTH * 3.0)
            }
            (Route::Who, Some(sky)) => views::who_page(sky),
            _ => views::not_found_page(),
        };
        let listeners = dom::mount_into(&self.document, &self.root, &scene.into(), &self.dispatch)?;

        let now = instant::now();
        let sky = match star_count {
            Some(_) => {
                let rng = StdRng::seed_from_u64(self.rng.gen());
                let speeds = starfield::layer_speeds();
                let view = StarfieldView::attach(&self.document, &speeds, now, rng)?;
                Some(Rc::new(RefCell::new(view)))
            }
            None => None,
        };
        let (universe, modal, menu) = match (&route, &sky) {
            (Route::Universe, Some(sky)) => (
                Some(Rc::new(UniverseView::attach(&self.document, sky.clone(), now)?)),
                Some(Overlay::attach(&self.document, views::MODAL_HOST_ID)?),
                Some(Overlay::attach(&self.document, views::MENU_HOST_ID)?),
            ),
            _ => (None, None, None),
        };

        let frame = match (&sky, &universe) {
            (None, None) => None,
            _ => {
                let (sky, universe) = (sky.clone(), universe.clone());
                Some(frame::start_loop(move |now| {
                    if let Some(sky) = &sky {
                        sky.borrow_mut().tick(now);
                    }
                    if let Some(universe) = &universe {
                        universe.tick(now);
                    }
                }))
            }
        };

        self.page = Some(MountedPage {
            _frame: frame,
            modal,
            menu,
            universe,
            _sky: sky,
            _listeners: listeners,
            route,
        });
        Ok(())
    }

    fn open_project(&mut self, instance_id: &str) -> anyhow::Result<()> {
        let marker = find_marker(instance_id)
            .ok_or_else(|| anyhow::anyhow!("unknown project {}", instance_id))?;
        let Some(modal) = self.page.as_mut().and_then(|p| p.modal.as_mut()) else {
            return Ok(());
        };
        log::info!("[modal] open {}", marker.id);
        modal.show(&self.document, views::project_modal(marker), &self.dispatch)
    }

    fn open_menu(&mut self) -> anyhow::Result<()> {
        let Some(menu) = self.page.as_mut().and_then(|p| p.menu.as_mut()) else {
            return Ok(());
        };
        menu.show(&self.document, views::menu_overlay(), &self.dispatch)
    }

    fn close_overlays(&mut self, modal: bool, menu: bool) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        if modal {
            if let Some(m) = page.modal.as_mut() {
                m.hide();
            }
        }
        if menu {
            if let Some(m) = page.menu.as_mut() {
                m.hide();
            }
        }
    }

    fn nudge(&self, direction: Direction) {
        if let Some(universe) = self.page.as_ref().and_then(|p| p.universe.as_ref()) {
            universe.nudge(direction, instant::now());
        }
    }
}

/// Route for the browser's current location.
pub fn current_route() -> Route {
    let pathname = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::from_pathname(&pathname)
}
