use yew::prelude::*;
use shared::{messages, BallotNotice, Candidate, TallyEntry, View, Winner};
use crate::styles::*;

pub fn render_view(view: &View, on_vote: &Callback<String>) -> Html {
    match view {
        View::Blank => html! {},
        View::Ballot { candidates, can_vote, notice } => render_ballot(candidates, *can_vote, *notice, on_vote),
        View::AdminPanel { results } => render_admin_panel(results),
        View::Winner(winner) => render_winner(winner.as_ref()),
    }
}

fn render_ballot(candidates: &[Candidate], can_vote: bool, notice: Option<BallotNotice>, on_vote: &Callback<String>) -> Html {
    let notice = match notice {
        Some(n @ BallotNotice::VotingClosed) => html! { <p class={notice_style("error")}>{n.message()}</p> },
        Some(n @ BallotNotice::AlreadyVoted) => html! { <p class={notice_style("warning")}>{n.message()}</p> },
        None => html! { <p class={notice_style("")}></p> },
    };

    html! {
        <>
            <h2 class={HEADING_LG}>{"Candidatos"}</h2>
            {notice}
            <div class={CANDIDATE_GRID}>
                {for candidates.iter().map(|c| render_candidate_card(c, can_vote, on_vote))}
            </div>
        </>
    }
}

fn render_candidate_card(candidate: &Candidate, can_vote: bool, on_vote: &Callback<String>) -> Html {
    // Disabled cards only lose their click handler; the session guards the vote itself.
    let (photo_class, onclick) = if can_vote {
        let name = candidate.name.clone();
        let on_vote = on_vote.clone();
        (
            combine_classes(CANDIDATE_PHOTO, "cursor-pointer"),
            Some(Callback::from(move |_: MouseEvent| on_vote.emit(name.clone()))),
        )
    } else {
        (combine_classes(CANDIDATE_PHOTO, "opacity-50 cursor-not-allowed"), None)
    };

    html! {
        <div class={CANDIDATE_CARD}>
            <h3 class={HEADING_SM}>{&candidate.course}</h3>
            <img src={candidate.photo.clone()} alt={candidate.name.clone()} class={photo_class} {onclick} />
            <p class={TEXT_CARD}>{format!("Aprendiz: {}", candidate.name)}</p>
            <p class={TEXT_CARD}>{format!("Ficha: {}", candidate.cohort)}</p>
        </div>
    }
}

fn render_admin_panel(results: &[TallyEntry]) -> Html {
    html! {
        <>
            <div class="text-center text-white space-y-6">
                <h2 class="text-4xl font-bold">{"Panel de Administración"}</h2>
                <p class="text-lg">{"Desde aquí puedes iniciar o cerrar las votaciones."}</p>
            </div>
            <div class="space-y-4 text-lg text-white text-center mt-8">
                <h3 class={HEADING_MD}>{"Resultados actuales"}</h3>
                {for results.iter().map(|entry| html! {
                    <p>{format!("{}: ", entry.name)}<strong>{format!("{} votos", entry.votes)}</strong></p>
                })}
            </div>
        </>
    }
}

fn render_winner(winner: Option<&Winner>) -> Html {
    html! {
        <>
            <h2 class="text-4xl font-bold text-white mb-8 text-center">{"Ganador"}</h2>
            {match winner {
                Some(w) => html! {
                    <p class="text-2xl text-center text-green-300 font-bold">
                        {"🎉 "}<span class="text-white">{&w.name}</span>{" con "}
                        <span class="text-white">{w.votes}</span>{" votos 🎉"}
                    </p>
                },
                None => html! { <p class={notice_style("warning")}>{messages::NO_VOTES}</p> },
            }}
        </>
    }
}
