use geohash_rs::{GeoCell, SearchConfig, search_area};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lng = 13.81600230932235718;
    let lat = 23.35700050086033031;
    let radius = 10.0;

    let cell = GeoCell::from_wgs84(&(lng, lat), 26)?;
    println!("Geohash: {}", cell.id);
    println!("Bits: {} (step {})", cell.cell.bits, cell.step());

    let config = SearchConfig::default();
    let area = search_area(&(lng, lat), radius, &config)?;
    println!("Search step: {}", area.step());

    let ranges = area.ranges(config.full_bits);
    println!(
        "Ranges (center, N, S, E, W, NE, NW, SE, SW): {}",
        serde_json::to_string_pretty(&ranges)?
    );

    Ok(())
}
