//! Static site copy.

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub button_label: &'static str,
}

pub const CONFIG: SiteConfig = SiteConfig {
    name: "Comprueba",
    tagline: "Página de prueba del frontend: un botón, un mensaje y una petición al servidor",
    button_label: "Probar JavaScript",
};
