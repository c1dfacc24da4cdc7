use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_namegen_core::config::Settings;
use rs_namegen_core::model::ensemble::Ensemble;
use rs_namegen_core::model::generator::Generator;
use rs_namegen_core::model::name_generator::NameGenerator;
use rs_namegen_core::random::RngSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows training sizes and rejected candidates
    env_logger::init();

    let towns = [
        "Ashford", "Bramwell", "Castleton", "Dunmore", "Eastbrook", "Fernhill", "Glenwood", "Harrowgate",
        "Ironbridge", "Kingsbury", "Langley", "Millbrook", "Northwood", "Oakham", "Pembury", "Redhill",
    ];

    // Any rand generator works; a fixed seed makes runs reproducible
    let mut rng = RngSource(StdRng::seed_from_u64(42));

    // Order 3 with a little smoothing and back-off to lower orders
    let generator = NameGenerator::new(&towns, 3, 0.01, true);
    for i in 0..10 {
        println!("Generated town {}: {}", i + 1, generator.generate_name(5, 10, &mut rng));
    }

    // Out of range parameters are clamped, never rejected
    let clamped = Ensemble::new(&towns, 0, 5.0, false);
    println!("order 0 -> {}, prior 5.0 -> {}", clamped.order(), clamped.prior());

    // The raw ensemble keeps its sentinel padding
    println!("Raw ensemble output: {}", clamped.generate(&mut rng));

    // An unreachable constraint still returns the last candidate
    let attempt = generator.try_generate_name(100, 200, &mut rng);
    println!(
        "Unreachable range: '{}' after {} attempts (satisfied: {})",
        attempt.name, attempt.attempts, attempt.satisfied
    );

    // Settings can come from TOML; missing keys keep their defaults
    let settings = Settings::from_toml_str("[model]\norder = 2\nbackoff = true\n")?;
    let mut library = Generator::new(settings.model);
    library.insert("towns", &towns)?;
    for name in library.corpus_names() {
        println!(
            "From '{}': {}",
            name,
            library.generate_name(&name, settings.name.min_length, settings.name.max_length, &mut rng)?
        );
    }

    Ok(())
}
