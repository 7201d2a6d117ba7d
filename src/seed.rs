//! Sample data for a freshly synced database.

use diesel::sqlite::SqliteConnection;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Blob;
use crate::store;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Ken", "Leslie", "Margaret", "Niklaus", "Radia", "Sophie", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Cerf", "Dijkstra", "Floyd", "Hopper", "Kahn", "Knuth", "Lamarr",
    "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie", "Shannon", "Sutherland", "Thompson",
    "Turing", "Wilson", "Wirth",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "and Sons", "LLC", "Group"];

const WORDS: &[&str] = &[
    "adaptive", "bandwidth", "capacity", "dynamic", "encoding", "framework", "gateway",
    "hierarchy", "interface", "junction", "kernel", "latency", "matrix", "network", "protocol",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub containers: usize,
    pub sections: usize,
    pub failures: usize,
}

/// Creates `count` containers, each with one section. Failures are logged
/// and counted, never returned, so one bad row does not stop the rest.
///
/// All values for a round are drawn before any write, so a given rng yields
/// the same names whatever fails.
pub fn run<R: Rng + ?Sized>(conn: &SqliteConnection, count: usize, rng: &mut R) -> SeedReport {
    let mut report = SeedReport::default();
    for _ in 0..count {
        let company = company_name(rng);
        let data = blob(rng);
        let person = person_name(rng);
        let container = match store::create_container(conn, &company, Some(&data)) {
            Ok(container) => container,
            Err(error) => {
                log::error!("Error: {}", error);
                report.failures += 1;
                continue;
            }
        };
        report.containers += 1;

        match store::create_section(conn, &container.id, &person) {
            Ok(_) => report.sections += 1,
            Err(error) => {
                log::error!("Error: {}", error);
                report.failures += 1;
            }
        }
    }
    log::info!(
        "Seeded {} containers, {} sections, {} failures",
        report.containers,
        report.sections,
        report.failures
    );
    report
}

fn pick<R: Rng + ?Sized>(rng: &mut R, list: &[&'static str]) -> &'static str {
    list.choose(rng).copied().unwrap_or_default()
}

fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{} - {}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn blob<R: Rng + ?Sized>(rng: &mut R) -> Blob {
    Blob {
        field1: Some(String::from(pick(rng, WORDS))),
        field2: Some(String::from(pick(rng, WORDS))),
        field3: Some(String::from(pick(rng, WORDS))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn person_names_have_no_spaces() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let name = person_name(&mut rng);
            assert!(!name.contains(' '), "{}", name);
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn company_names_come_in_known_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let name = company_name(&mut rng);
            assert!(
                name.contains(" - ")
                    || name.contains(" and ")
                    || COMPANY_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)),
                "{}",
                name
            );
        }
    }
}
