use libcamp::campground::Campground;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "PascalCase")]
pub(crate) struct CampgroundRow {
    #[tabled(display("tabled::derive::display::option", ""))]
    pub(crate) id: Option<String>,
    pub(crate) title: String,
    pub(crate) price: u32,
    pub(crate) location: String,
}

impl CampgroundRow {
    pub(crate) fn new(camp: &Campground) -> Self {
        Self {
            id: camp.id.clone(),
            title: camp.title.clone(),
            price: camp.price,
            location: camp.location.clone(),
        }
    }
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "PascalCase")]
pub(crate) struct CampgroundRowFull {
    #[tabled(display("tabled::derive::display::option", ""))]
    id: Option<String>,
    title: String,
    price: u32,
    location: String,
    author: String,
    #[tabled(display("tabled::derive::display::option", ""))]
    latitude: Option<f64>,
    #[tabled(display("tabled::derive::display::option", ""))]
    longitude: Option<f64>,
    images: String,
    description: String,
}

impl CampgroundRowFull {
    pub(crate) fn new(camp: &Campground) -> Self {
        Self {
            id: camp.id.clone(),
            title: camp.title.clone(),
            price: camp.price,
            location: camp.location.clone(),
            author: camp.author.clone(),
            latitude: camp.geometry.as_ref().map(|g| g.latitude()),
            longitude: camp.geometry.as_ref().map(|g| g.longitude()),
            images: camp
                .images
                .iter()
                .map(|img| img.url.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            description: camp.description.clone(),
        }
    }
}
