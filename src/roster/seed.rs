//! Sample data for demos and first runs.
//!
//! Records are generated deterministically from a seed, so the same call
//! always produces the same roster. Values follow the shapes real records
//! have: Turkish names, ASCII-only emails, mobile numbers on the 530-559
//! operator codes, employment dates 2018-2022 and birth dates 1980-1999.

use crate::model::{Department, EmployeeDraft, Position};
use rand::{rngs::StdRng, Rng, SeedableRng};

const FIRST_NAMES: [&str; 20] = [
    "Ahmet", "Mehmet", "Ayşe", "Fatma", "Ali", "Zeynep", "Mustafa", "Emine", "Hüseyin", "Hatice",
    "İbrahim", "Elif", "Hasan", "Merve", "Ömer", "Esra", "Yusuf", "Büşra", "Murat", "Derya",
];

const LAST_NAMES: [&str; 20] = [
    "Sourtimes", "Yılmaz", "Demir", "Kaya", "Yıldız", "Çelik", "Şahin", "Koç", "Aydın", "Özdemir",
    "Arslan", "Doğan", "Kılıç", "Aslan", "Çetin", "Şimşek", "Yıldırım", "Özkan", "Polat", "Öztürk",
];

/// Lowercases and strips Turkish diacritics for use in an email address.
pub fn ascii_fold(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| *c != '\u{0307}')
        .map(|c| match c {
            'ü' => 'u',
            'ö' => 'o',
            'ç' => 'c',
            'ş' => 's',
            'ğ' => 'g',
            'ı' => 'i',
            other => other,
        })
        .collect()
}

pub fn sample_employees(count: usize, seed: u64) -> Vec<EmployeeDraft> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| sample_employee(&mut rng)).collect()
}

fn sample_employee(rng: &mut StdRng) -> EmployeeDraft {
    let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let department = Department::ALL[rng.gen_range(0..Department::ALL.len())];
    let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];

    let date_of_employment = sample_date(rng, 2018, 5);
    let date_of_birth = sample_date(rng, 1980, 20);

    let operator: u32 = rng.gen_range(530..560);
    let phone = format!(
        "+(90) {} {:03} {:02} {:02}",
        operator,
        rng.gen_range(0..1000),
        rng.gen_range(0..100),
        rng.gen_range(0..100)
    );

    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_employment,
        date_of_birth,
        phone,
        email: format!("{}@{}.com", ascii_fold(first_name), ascii_fold(last_name)),
        department,
        position,
    }
}

fn sample_date(rng: &mut StdRng, first_year: u32, span: u32) -> String {
    let year = first_year + rng.gen_range(0..span);
    let month: u32 = rng.gen_range(1..=12);
    let day: u32 = rng.gen_range(1..=28);
    format!("{}-{:02}-{:02}", year, month, day)
}
