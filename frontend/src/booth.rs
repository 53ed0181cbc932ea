use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::{AdminCredentials, Candidate, Controller, Directory, Reload, Result, VotingSession};
use tracing::info;
use crate::browser::{LocalStorage, WindowPrompt};
use crate::config::CONFIG;
use crate::directory::HttpDirectory;
use crate::styles::*;
use crate::views::render_view;

pub enum Msg {
    CandidatesLoaded(Result<Vec<Candidate>>, Reload),
    Vote(String),
    ShowLogin,
    CancelLogin,
    UpdateUsername(String),
    UpdatePassword(String),
    SubmitLogin,
    CredentialsReceived {
        record: Result<AdminCredentials>,
        username: String,
        password: String,
    },
    Logout,
    StartVoting,
    StopVoting,
}

pub struct Booth {
    controller: Controller<LocalStorage, WindowPrompt, HttpDirectory>,
}

impl Component for Booth {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = VotingSession::new(LocalStorage::open(), WindowPrompt);
        let booth = Self {
            controller: Controller::new(session, HttpDirectory::new(&CONFIG)),
        };
        booth.reload(ctx, Reload::Ballot);
        booth
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CandidatesLoaded(loaded, reload) => {
                // Failures are logged by the controller and leave the view as it was.
                self.controller.apply_candidates(loaded, reload).is_ok()
            }
            Msg::Vote(candidate) => {
                if self.controller.begin_vote(&candidate).is_ok() {
                    self.reload(ctx, Reload::Ballot);
                }
                true
            }
            Msg::ShowLogin => {
                self.controller.session_mut().show_login_form();
                true
            }
            Msg::CancelLogin => {
                self.controller.session_mut().cancel_login_form();
                true
            }
            Msg::UpdateUsername(value) => {
                self.controller.session_mut().set_username(value);
                true
            }
            Msg::UpdatePassword(value) => {
                self.controller.session_mut().set_password(value);
                true
            }
            Msg::SubmitLogin => {
                let (username, password) = self.controller.session().login_fields().submission();
                let directory = *self.controller.directory();
                ctx.link().send_future(async move {
                    Msg::CredentialsReceived {
                        record: directory.admin_credentials().await,
                        username,
                        password,
                    }
                });
                false
            }
            Msg::CredentialsReceived { record, username, password } => {
                let outcome = self.controller.apply_credentials(record, &username, &password);
                info!(?outcome, "Administrator login attempt");
                true
            }
            Msg::Logout => {
                self.controller.begin_logout();
                self.reload(ctx, Reload::RoundOutcome);
                true
            }
            Msg::StartVoting => {
                self.controller.start_voting();
                true
            }
            Msg::StopVoting => {
                self.controller.stop_voting();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={PAGE}>
                {self.render_header(ctx)}
                {self.render_login_form(ctx)}
                <main id="main-content" class={MAIN}>
                    {render_view(self.controller.session().view(), &ctx.link().callback(Msg::Vote))}
                </main>
            </div>
        }
    }
}

impl Booth {
    fn reload(&self, ctx: &Context<Self>, reload: Reload) {
        let directory = *self.controller.directory();
        ctx.link().send_future(async move {
            Msg::CandidatesLoaded(directory.candidates().await, reload)
        });
    }

    fn render_header(&self, ctx: &Context<Self>) -> Html {
        let chrome = self.controller.session().chrome();

        html! {
            <header class={HEADER}>
                <div class={HEADER_INNER}>
                    <h1 class="text-2xl font-bold text-green-200">{"Elecciones"}</h1>
                    <div class="flex gap-3">
                        <button
                            type="button"
                            onclick={ctx.link().callback(|_| Msg::ShowLogin)}
                            class={visible_if(chrome.login_button_visible, &button(BUTTON_PRIMARY))}
                        >
                            {"Iniciar sesión"}
                        </button>
                        <div class={visible_if(chrome.admin_controls_visible, "flex gap-3")}>
                            <button
                                type="button"
                                onclick={ctx.link().callback(|_| Msg::StartVoting)}
                                disabled={!chrome.start_enabled}
                                class={button(BUTTON_PRIMARY)}
                            >
                                {"Iniciar votación"}
                            </button>
                            <button
                                type="button"
                                onclick={ctx.link().callback(|_| Msg::StopVoting)}
                                disabled={!chrome.stop_enabled}
                                class={button(BUTTON_DANGER)}
                            >
                                {"Cerrar votación"}
                            </button>
                            <button
                                type="button"
                                onclick={ctx.link().callback(|_| Msg::Logout)}
                                class={button(BUTTON_SECONDARY)}
                            >
                                {"Cerrar sesión"}
                            </button>
                        </div>
                    </div>
                </div>
            </header>
        }
    }

    fn render_login_form(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitLogin
        });

        let session = self.controller.session();
        let fields = session.login_fields();

        html! {
            <div class={visible_if(session.chrome().login_form_visible, "fixed inset-0 z-40 flex items-center justify-center bg-black/60")}>
                <form {onsubmit} class={combine_classes(CARD, "space-y-4")}>
                    <h2 class={HEADING_MD}>{"Administrador"}</h2>
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>{"Usuario"}</label>
                        <input
                            id="usuario"
                            type="text"
                            value={fields.username.clone()}
                            class={INPUT_BASE}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let target = e.target_unchecked_into::<HtmlInputElement>();
                                Msg::UpdateUsername(target.value())
                            })}
                        />
                    </div>
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL}>{"Contraseña"}</label>
                        <input
                            id="contrasena"
                            type="password"
                            value={fields.password.clone()}
                            class={INPUT_BASE}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let target = e.target_unchecked_into::<HtmlInputElement>();
                                Msg::UpdatePassword(target.value())
                            })}
                        />
                    </div>
                    <div class="flex gap-3">
                        <button type="submit" class={button(BUTTON_PRIMARY)}>{"Ingresar"}</button>
                        <button
                            type="button"
                            onclick={ctx.link().callback(|_| Msg::CancelLogin)}
                            class={button(BUTTON_SECONDARY)}
                        >
                            {"Cancelar"}
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}
