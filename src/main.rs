use burbuja::resources::ResourceManager;

/// Asset smoke-check: load everything the game would load and print what a
/// full trip around the map cycle produces. Pass an asset root as the first
/// argument (defaults to the working directory).
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let mut resources = match ResourceManager::builder().with_root(root).build() {
        Ok(resources) => resources,
        Err(err) => {
            eprintln!("failed to load resources: {err}");
            std::process::exit(1);
        }
    };

    println!("palette: {} tiles", resources.palette().len());
    let maps = resources.available_maps();
    println!("maps on disk: {maps:?}");

    for _ in 0..maps.len().max(1) {
        match resources.load_next() {
            Ok(Some(map)) => {
                let player = map.player();
                println!(
                    "map{}: {}x{} tiles, {} sprites, player at ({}, {})",
                    resources.current_map(),
                    map.width(),
                    map.height(),
                    map.sprites().len(),
                    player.position.x,
                    player.position.y,
                );
            }
            Ok(None) => {
                println!("no maps to load");
                break;
            }
            Err(err) => {
                eprintln!("map load failed: {err}");
                std::process::exit(1);
            }
        }
    }
}
