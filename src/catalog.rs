//! The dashboard catalog.
//!
//! A read-only, ordered list of every dashboard the launcher can hand off
//! to. The set is compiled in; there is no discovery, filtering, or runtime
//! mutation. Destinations are opaque strings: some are absolute URLs into
//! the reporting service, others are `#/` fragment routes reserved for an
//! in-page router that does not exist yet. Nothing here validates either
//! kind.

/// One launchable dashboard.
///
/// All fields are carried verbatim from the catalog definition. `icon`
/// names a glyph family entry (`fa-*`); unknown names are still carried
/// and fall back to a neutral glyph at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub url: String,
}

impl DashboardDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            url: url.into(),
        }
    }

    /// True for `#/` fragment routes. Only used to annotate listings;
    /// routing itself is not implemented.
    pub fn is_fragment_route(&self) -> bool {
        self.url.starts_with("#/")
    }
}

/// The ordered dashboard list. Iteration order is definition order, and
/// definition order is display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<DashboardDescriptor>,
}

impl Catalog {
    /// The compiled-in reporting catalog.
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            DashboardDescriptor::new(
                "mipres",
                "MIPRES",
                "Gestión y seguimiento de prescripciones médicas y tecnologías en salud",
                "fa-prescription-bottle-alt",
                "https://app.powerbi.com/groups/310c4e2e-ab00-4cf2-b53b-56d736445f64/reports/ce482f23-4e05-4b17-9927-1857232a2fa0/ec5692e44ad6b0fce806?experience=power-bi",
            ),
            DashboardDescriptor::new(
                "juntas-medicas",
                "Juntas Médicas",
                "Análisis y seguimiento de decisiones de juntas médicas interdisciplinarias",
                "fa-user-md",
                "https://app.powerbi.com/groups/310c4e2e-ab00-4cf2-b53b-56d736445f64/reports/e3252ad7-4572-495f-819a-1ad1b0217325/5bf25a5fe6b31931ac4b?experience=power-bi",
            ),
            DashboardDescriptor::new(
                "recobros",
                "Recobros",
                "Control y gestión de recobros ante entidades responsables",
                "fa-file-invoice-dollar",
                "#/recobros",
            ),
            DashboardDescriptor::new(
                "capacidad-instalada",
                "Capacidad Instalada",
                "Recursos físicos, tecnológicos y humanos disponibles",
                "fa-hospital",
                "https://app.powerbi.com/groups/310c4e2e-ab00-4cf2-b53b-56d736445f64/reports/df27c179-ed95-48ad-a587-31c9389eea5f/c2b1d9373df57f1040c9?experience=power-bi",
            ),
            DashboardDescriptor::new(
                "gestion-contratos",
                "Gestión de Contratos",
                "Administración integral de contratos con aseguradoras y entidades",
                "fa-file-contract",
                "https://app.powerbi.com/groups/310c4e2e-ab00-4cf2-b53b-56d736445f64/reports/cdd5d8c4-b0ad-4f52-9e34-359617dda1da/c09770e1b556c620317a?experience=power-bi",
            ),
            DashboardDescriptor::new(
                "descuentos-bonificaciones",
                "Descuentos y Bonificaciones",
                "Análisis de incentivos económicos y ajustes contractuales",
                "fa-percentage",
                "#/descuentos-bonificaciones",
            ),
            DashboardDescriptor::new(
                "poblacion",
                "Población",
                "Caracterización demográfica y epidemiológica de usuarios",
                "fa-users",
                "#/poblacion",
            ),
            DashboardDescriptor::new(
                "analisis-eps",
                "Análisis de EPS Nacional",
                "Comparativo y tendencias del sistema de salud a nivel nacional",
                "fa-chart-line",
                "#/analisis-eps",
            ),
        ])
    }

    pub fn from_entries(entries: Vec<DashboardDescriptor>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DashboardDescriptor> {
        self.entries.iter()
    }

    pub fn find(&self, id: &str) -> Option<&DashboardDescriptor> {
        self.entries.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
