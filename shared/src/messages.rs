//! User-facing text shown by the booth.

pub const VOTING_INACTIVE: &str = "Las votaciones no están activas. No puedes votar en este momento.";
pub const ALREADY_VOTED_NOTICE: &str = "Ya has votado. Gracias por tu participación.";

pub const VOTING_CLOSED_ALERT: &str = "Las votaciones están cerradas.";
pub const ALREADY_VOTED_ALERT: &str = "Ya has votado.";

pub const WRONG_CREDENTIALS: &str = "Credenciales incorrectas.";
pub const CREDENTIALS_UNAVAILABLE: &str = "Error al validar las credenciales";

pub const VOTING_STARTED: &str = "Votaciones iniciadas.";
pub const VOTING_STOPPED: &str = "Votaciones cerradas. Los resultados se mostrarán al cerrar sesión.";

pub const NO_VOTES: &str = "No hay votos registrados.";

pub fn confirm_vote(candidate: &str) -> String {
    format!("¿Estás seguro que deseas votar por {candidate}?")
}

pub fn vote_recorded(candidate: &str) -> String {
    format!("¡Voto registrado para {candidate}!")
}
