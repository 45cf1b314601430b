use crate::content::{
    footer_notice, ProjectCard, SectionId, SectionSpec, SkillCard, SocialLink, ABOUT,
    CONTACT_INVITE, EMAIL, OWNER_NAME, PROJECTS, RESUME, SECTIONS, SKILLS,
    SOCIAL_LINKS, TAGLINE,
};
use crate::log::{log_event, LogLevel};
use crate::reveal::{RevealConfig, RevealEffect, RevealLatch};
use crate::theme::{KeyValueStore, PresentationRoot, StorageError, Theme, ThemePreference};
use js_sys::{Array, Reflect};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Storage,
};
use yew::prelude::*;

const FRONTEND_LOG_LEVEL: LogLevel = LogLevel::Info;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn describe_js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|error| StorageError::Write(describe_js_error(&error)))
    }
}

/// The `<html>` element.
struct DocumentRoot;

impl PresentationRoot for DocumentRoot {
    fn set_class(&self, class: &str, present: bool) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force(class, present);
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Clone, PartialEq)]
struct ThemeContext {
    theme: Theme,
    toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct ThemeProviderProps {
    #[prop_or_default]
    children: Html,
}

#[function_component(ThemeProvider)]
fn theme_provider(props: &ThemeProviderProps) -> Html {
    let preference = use_memo((), |_| {
        ThemePreference::new(BrowserStorage, DocumentRoot).with_log_level(FRONTEND_LOG_LEVEL)
    });
    let theme = use_state(|| Theme::Light);

    {
        let preference = preference.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            preference.initialize();
            theme.set(preference.theme());
            || ()
        });
    }

    let toggle = {
        let preference = preference.clone();
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            preference.toggle();
            theme.set(preference.theme());
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let Some(context) = use_context::<ThemeContext>() else {
        return html! {};
    };

    let onclick = {
        let toggle = context.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button
            class="btn btn-light theme-toggle position-absolute top-0 end-0 m-3"
            type="button"
            aria-label={context.theme.toggle_label()}
            title={context.theme.toggle_label()}
            onclick={onclick}
        >
            <span aria-hidden="true">{context.theme.icon()}</span>
        </button>
    }
}

/// Keeps the observer and its JS callback alive together; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_until_revealed(
    node: &NodeRef,
    config: RevealConfig,
    on_reveal: impl Fn() + 'static,
) -> Option<RevealObserver> {
    let element = node.cast::<Element>()?;
    let latch = Rc::new(Cell::new(RevealLatch::default()));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            let mut state = latch.get();
            if state.observe(intersecting) {
                latch.set(state);
                observer.disconnect();
                on_reveal();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.clamped_threshold()));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    config: RevealConfig,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let latch = use_state(|| RevealLatch::initial(prefers_reduced_motion()));

    {
        let node = node.clone();
        let latch = latch.clone();
        let config = props.config;
        use_effect_with((), move |_| {
            let observer = if latch.is_revealed() {
                None
            } else {
                let on_reveal = {
                    let latch = latch.clone();
                    move || latch.set(RevealLatch::revealed())
                };
                let observer = observe_until_revealed(&node, config, on_reveal);

                if observer.is_none() {
                    log_event(
                        FRONTEND_LOG_LEVEL,
                        LogLevel::Info,
                        "reveal.observer_unavailable",
                        json!({ "effect": config.effect.as_str() }),
                    );
                    let mut forced = *latch;
                    if forced.force() {
                        latch.set(forced);
                    }
                }
                observer
            };

            move || drop(observer)
        });
    }

    let revealed = latch.is_revealed();

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("is-revealed"))}
            style={props.config.style(revealed)}
            data-reveal={props.config.effect.as_str()}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    spec: SectionSpec,
    #[prop_or_default]
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    let heading_id = format!("{}-heading", props.spec.anchor);

    html! {
        <Reveal config={RevealConfig::new(props.spec.effect)}>
            <section
                id={props.spec.anchor}
                class="section mb-5"
                aria-labelledby={heading_id.clone()}
            >
                <h2 id={heading_id}>{props.spec.title}</h2>
                <div>{props.children.clone()}</div>
            </section>
        </Reveal>
    }
}

fn social_link(link: &SocialLink) -> Html {
    let glyph = html! { <span aria-hidden="true">{link.glyph()}</span> };

    if link.opens_new_tab() {
        html! {
            <a href={link.href} aria-label={link.label} target="_blank" rel="noopener noreferrer">
                {glyph}
            </a>
        }
    } else {
        html! { <a href={link.href} aria-label={link.label}>{glyph}</a> }
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <Reveal config={RevealConfig::new(RevealEffect::FadeIn)}>
            <header class="text-center py-5 header-gradient">
                <div class="overlay">
                    <h1 class="display-4 font-weight-bold text-white">{OWNER_NAME}</h1>
                    <p class="lead mt-2 text-white">{TAGLINE}</p>
                    <nav
                        class="d-flex justify-content-center gap-4 mt-4 fs-2 text-primary"
                        aria-label="Profiles"
                    >
                        { for SOCIAL_LINKS.iter().map(social_link) }
                    </nav>
                    <ThemeToggle />
                </div>
            </header>
        </Reveal>
    }
}

fn skill_card(card: &SkillCard) -> Html {
    html! {
        <div class="col-md-4 mb-4" key={card.title}>
            <div class="card shadow-sm skills-card">
                <div class="card-body">
                    <h5 class="card-title">{card.title}</h5>
                    <p class="card-text">{card.items}</p>
                </div>
            </div>
        </div>
    }
}

fn project_card(project: &ProjectCard) -> Html {
    html! {
        <div class="col-md-4" key={project.title}>
            <div class="card project-card shadow-lg">
                <img src={project.image} alt={project.image_alt} class="card-img-top" loading="lazy" />
                <div class="card-body">
                    <h5 class="card-title">{project.title}</h5>
                    <p class="card-text">{project.summary}</p>
                    <a
                        href={project.repo_url}
                        class="btn btn-primary"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"View Repo"}
                    </a>
                </div>
            </div>
        </div>
    }
}

fn section_body(id: SectionId) -> Html {
    match id {
        SectionId::About => html! { <p>{ABOUT}</p> },
        SectionId::Skills => html! {
            <div class="row">{ for SKILLS.iter().map(skill_card) }</div>
        },
        SectionId::Projects => html! {
            <div class="row">{ for PROJECTS.iter().map(project_card) }</div>
        },
        SectionId::Resume => html! {
            <a class="text-primary" href={RESUME.href} download={RESUME.file_name()}>
                {RESUME.label}
            </a>
        },
        SectionId::Contact => html! {
            <>
                <p>{CONTACT_INVITE}</p>
                <p>{format!("Email: {EMAIL}")}</p>
            </>
        },
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="text-center py-4 text-muted">{footer_notice(current_year())}</footer>
    }
}

#[function_component(PageShell)]
fn page_shell() -> Html {
    let theme = use_context::<ThemeContext>()
        .map(|context| context.theme)
        .unwrap_or(Theme::Light);

    html! {
        <div class={classes!("font-sans", theme.wrapper_class(), "text-dark")}>
            <Header />
            <main id="content" class="container py-5">
                { for SECTIONS.iter().map(|spec| html! {
                    <Section key={spec.anchor} spec={*spec}>{section_body(spec.id)}</Section>
                }) }
            </main>
            <Footer />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <PageShell />
        </ThemeProvider>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
