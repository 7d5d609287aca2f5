//! Canned vocabulary used to build sample campgrounds

/// A city that a generated campground can be placed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub city: &'static str,
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn city(city: &'static str, state: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        city,
        state,
        latitude,
        longitude,
    }
}

/// The first word of a campground title
pub const DESCRIPTORS: &[&str] = &[
    "Forest",
    "Ancient",
    "Petrified",
    "Roaring",
    "Cascade",
    "Tumbling",
    "Silent",
    "Redwood",
    "Bullfrog",
    "Maple",
    "Misty",
    "Elk",
    "Grizzly",
    "Ocean",
    "Sea",
    "Sky",
    "Dusty",
    "Diamond",
];

/// The second word of a campground title
pub const PLACES: &[&str] = &[
    "Flats",
    "Village",
    "Canyon",
    "Pond",
    "Group Camp",
    "Horse Camp",
    "Ghost Town",
    "Camp",
    "Dispersed Camp",
    "Backcountry",
    "River",
    "Creek",
    "Creekside",
    "Bay",
    "Spring",
    "Bayshore",
    "Sands",
    "Mule Camp",
    "Hunting Camp",
    "Cliffs",
    "Hollow",
];

pub const CITIES: &[City] = &[
    city("New York", "New York", 40.7127837, -74.0059413),
    city("Los Angeles", "California", 34.0522342, -118.2436849),
    city("Chicago", "Illinois", 41.8781136, -87.6297982),
    city("Houston", "Texas", 29.7604267, -95.3698028),
    city("Philadelphia", "Pennsylvania", 39.9525839, -75.1652215),
    city("Phoenix", "Arizona", 33.4483771, -112.0740373),
    city("San Antonio", "Texas", 29.4241219, -98.4936282),
    city("San Diego", "California", 32.715738, -117.1610838),
    city("Dallas", "Texas", 32.7766642, -96.7969879),
    city("San Jose", "California", 37.3382082, -121.8863286),
    city("Austin", "Texas", 30.267153, -97.7430608),
    city("Indianapolis", "Indiana", 39.768403, -86.158068),
    city("Jacksonville", "Florida", 30.3321838, -81.655651),
    city("San Francisco", "California", 37.7749295, -122.4194155),
    city("Columbus", "Ohio", 39.9611755, -82.9987942),
    city("Charlotte", "North Carolina", 35.2270869, -80.8431267),
    city("Fort Worth", "Texas", 32.7554883, -97.3307658),
    city("Detroit", "Michigan", 42.331427, -83.0457538),
    city("El Paso", "Texas", 31.7775757, -106.4424559),
    city("Memphis", "Tennessee", 35.1495343, -90.0489801),
    city("Seattle", "Washington", 47.6062095, -122.3320708),
    city("Denver", "Colorado", 39.7392358, -104.990251),
    city("Washington", "District of Columbia", 38.9071923, -77.0368707),
    city("Boston", "Massachusetts", 42.3600825, -71.0588801),
    city("Nashville", "Tennessee", 36.1626638, -86.7816016),
    city("Baltimore", "Maryland", 39.2903848, -76.6121893),
    city("Oklahoma City", "Oklahoma", 35.4675602, -97.5164276),
    city("Louisville", "Kentucky", 38.2526647, -85.7584557),
    city("Portland", "Oregon", 45.5230622, -122.6764816),
    city("Las Vegas", "Nevada", 36.1699412, -115.1398296),
    city("Milwaukee", "Wisconsin", 43.0389025, -87.9064736),
    city("Albuquerque", "New Mexico", 35.0853336, -106.6055534),
    city("Tucson", "Arizona", 32.2217429, -110.926479),
    city("Fresno", "California", 36.7468422, -119.7725868),
    city("Sacramento", "California", 38.5815719, -121.4943996),
    city("Long Beach", "California", 33.7700504, -118.1937395),
    city("Kansas City", "Missouri", 39.0997265, -94.5785667),
    city("Mesa", "Arizona", 33.4151843, -111.8314724),
    city("Virginia Beach", "Virginia", 36.8529263, -75.977985),
    city("Atlanta", "Georgia", 33.7489954, -84.3879824),
    city("Colorado Springs", "Colorado", 38.8338816, -104.8213634),
    city("Omaha", "Nebraska", 41.2523634, -95.9979883),
    city("Raleigh", "North Carolina", 35.7795897, -78.6381787),
    city("Miami", "Florida", 25.7616798, -80.1917902),
    city("Oakland", "California", 37.8043637, -122.2711137),
    city("Minneapolis", "Minnesota", 44.977753, -93.2650108),
    city("Tulsa", "Oklahoma", 36.1539816, -95.992775),
    city("Cleveland", "Ohio", 41.49932, -81.6943605),
    city("Wichita", "Kansas", 37.6871761, -97.330053),
    city("Arlington", "Texas", 32.735687, -97.1080656),
    city("New Orleans", "Louisiana", 29.9510658, -90.0715323),
    city("Bakersfield", "California", 35.3732921, -119.0187125),
    city("Tampa", "Florida", 27.950575, -82.4571776),
    city("Honolulu", "Hawaii", 21.3069444, -157.8583333),
    city("Aurora", "Colorado", 39.7294319, -104.8319195),
    city("Anaheim", "California", 33.8352932, -117.9145036),
    city("Santa Ana", "California", 33.7455731, -117.8678338),
    city("St. Louis", "Missouri", 38.6270025, -90.1994042),
    city("Riverside", "California", 33.9533487, -117.3961564),
    city("Corpus Christi", "Texas", 27.8005828, -97.396381),
    city("Lexington", "Kentucky", 38.0405837, -84.5037164),
    city("Pittsburgh", "Pennsylvania", 40.4406248, -79.9958864),
    city("Anchorage", "Alaska", 61.2180556, -149.9002778),
    city("Stockton", "California", 37.9577016, -121.2907796),
    city("Cincinnati", "Ohio", 39.1031182, -84.5120196),
    city("St. Paul", "Minnesota", 44.9537029, -93.0899578),
    city("Toledo", "Ohio", 41.6639383, -83.555212),
    city("Newark", "New Jersey", 40.7356570, -74.1723667),
    city("Greensboro", "North Carolina", 36.0726354, -79.7919754),
    city("Plano", "Texas", 33.0198431, -96.6988856),
    city("Henderson", "Nevada", 36.0395247, -114.9817213),
    city("Lincoln", "Nebraska", 40.8257625, -96.6851982),
    city("Buffalo", "New York", 42.8864468, -78.8783689),
    city("Fort Wayne", "Indiana", 41.079273, -85.1393513),
    city("Jersey City", "New Jersey", 40.7281575, -74.0776417),
    city("Chula Vista", "California", 32.6400541, -117.0841955),
    city("Orlando", "Florida", 28.5383355, -81.3792365),
    city("St. Petersburg", "Florida", 27.773056, -82.64),
    city("Norfolk", "Virginia", 36.8507689, -76.2858726),
    city("Chandler", "Arizona", 33.3061605, -111.8412502),
    city("Laredo", "Texas", 27.5305671, -99.4803241),
    city("Madison", "Wisconsin", 43.0730517, -89.4012302),
    city("Durham", "North Carolina", 35.9940329, -78.898619),
    city("Lubbock", "Texas", 33.5778631, -101.8551665),
    city("Winston-Salem", "North Carolina", 36.0998596, -80.244216),
    city("Garland", "Texas", 32.912624, -96.6388833),
    city("Glendale", "Arizona", 33.5386523, -112.1859866),
    city("Hialeah", "Florida", 25.8576, -80.2781057),
    city("Reno", "Nevada", 39.5296329, -119.8138027),
    city("Baton Rouge", "Louisiana", 30.4582829, -91.1403196),
    city("Irvine", "California", 33.6839473, -117.7946942),
    city("Chesapeake", "Virginia", 36.7682088, -76.2874927),
    city("Irving", "Texas", 32.8140177, -96.9488945),
    city("Scottsdale", "Arizona", 33.4941704, -111.9260519),
    city("North Las Vegas", "Nevada", 36.1988592, -115.1175013),
    city("Fremont", "California", 37.5482697, -121.9885719),
    city("Gilbert", "Arizona", 33.3528264, -111.789027),
    city("San Bernardino", "California", 34.1083449, -117.2897652),
    city("Boise", "Idaho", 43.6187102, -116.2146068),
    city("Birmingham", "Alabama", 33.5206608, -86.80249),
];

/// The description shared by every generated campground
pub const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Consequatur molestiae praesentium reiciendis, provident expedita cum mollitia obcaecati, exercitationem sapiente sed repellat dolore quibusdam inventore rem deserunt ratione voluptas doloremque ad.";

/// Pairs of (url, filename) for the images hosted with the application's
/// image service
pub const HOSTED_IMAGES: &[(&str, &str)] = &[
    (
        "https://res.cloudinary.com/drggckqb4/image/upload/v1765219863/YelpCamp/mffkbq60u4yvprmtpy8c.jpg",
        "YelpCamp/mffkbq60u4yvprmtpy8c",
    ),
    (
        "https://res.cloudinary.com/drggckqb4/image/upload/v1765219864/YelpCamp/jghcahlrpeb2rs1y5b00.jpg",
        "YelpCamp/jghcahlrpeb2rs1y5b00",
    ),
];

/// A url that serves a different random campground photo on every request
pub const PLACEHOLDER_IMAGE_URL: &str = "https://source.unsplash.com/collection/483251";

/// The filename recorded for placeholder images, which have no hosted file
pub const PLACEHOLDER_IMAGE_FILENAME: &str = "placeholder";

/// The author id hardcoded by the application's development seed data
pub const DEFAULT_AUTHOR: &str = "692e03e22c5965e21aadf5b8";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cities_have_valid_coordinates() {
        for c in CITIES {
            assert!(!c.city.is_empty() && !c.state.is_empty());
            assert!((-90.0..=90.0).contains(&c.latitude), "{c:?}");
            assert!((-180.0..=180.0).contains(&c.longitude), "{c:?}");
        }
    }

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        assert_eq!(
            DESCRIPTORS.iter().collect::<HashSet<_>>().len(),
            DESCRIPTORS.len()
        );
        assert_eq!(PLACES.iter().collect::<HashSet<_>>().len(), PLACES.len());
        assert_eq!(
            CITIES
                .iter()
                .map(|c| (c.city, c.state))
                .collect::<HashSet<_>>()
                .len(),
            CITIES.len()
        );
    }
}
