use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe
    // (BACKEND_URL, API_PREFIX, TILE_URL_TEMPLATE, ...)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE (las comillas opcionales se quitan)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Solo configurar si no está ya definida en el entorno del build
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (backend http://localhost:8000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-env-changed=API_PREFIX");
    println!("cargo:rerun-if-env-changed=REQUEST_TIMEOUT_SECONDS");
    for key in [
        "TILE_URL_TEMPLATE",
        "TILE_ATTRIBUTION",
        "ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
