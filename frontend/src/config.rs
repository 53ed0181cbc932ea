pub struct Config {
    pub candidates_url: &'static str,
    pub admin_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            candidates_url: "https://raw.githubusercontent.com/CesarMCuellarCha/Elecciones/main/candidatos.json",
            admin_url: "https://raw.githubusercontent.com/CesarMCuellarCha/Elecciones/refs/heads/main/administrador.json",
        }
    }
}

pub const CONFIG: Config = Config::new();
