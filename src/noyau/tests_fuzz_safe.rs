//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées bien formées: seule la division par zéro (et le
//!   débordement vers l'infini, théorique ici) est une erreur admise
//! - invariant clé : jamais de panique, jamais de Valeur non finie

use std::time::{Duration, Instant};

use super::devise::Devise;
use super::erreur::ErreurEval;
use super::eval::{evaluer_expression, Sortie};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn est_erreur_attendue(e: ErreurEval) -> bool {
    // Liste blanche: sur une expression bien formée, seuls ces échecs
    // sont normaux.
    matches!(
        e,
        ErreurEval::DivisionParZero | ErreurEval::ResultatMalforme
    )
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(3) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}", 10 + rng.pick(90)),
        _ => format!("{}.{}", rng.pick(100), rng.pick(100)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    let op = match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    };

    if rng.coin() {
        format!(
            "({}{op}{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        )
    } else {
        // sans parenthèses: précédence en jeu
        format!(
            "{}{op}{}",
            gen_expr(rng, depth - 1),
            gen_atome(rng)
        )
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_valeurs_finies() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes issues (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for iter in 0..200 {
        budget(t0, max);

        let mut expr = gen_expr(&mut rng, 5);
        // un dénominateur nul garanti de temps en temps: la branche
        // DivisionParZero doit être balayée quoi que tire le RNG
        if iter % 10 == 0 {
            expr = format!("({expr})/0");
        }

        let a = evaluer_expression(&expr, Devise::Usd);
        let b = evaluer_expression(&expr, Devise::Usd);
        assert_eq!(a, b, "non déterministe pour {expr:?}");

        match a {
            Sortie::Valeur(v) => {
                assert!(v.is_finite(), "valeur non finie pour {expr:?}");
                seen_ok += 1;
            }
            Sortie::Erreur(e) => {
                assert!(
                    est_erreur_attendue(e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
            Sortie::Vide => panic!("Vide pour une expression non vide: {expr:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_modes_equivalents_sans_virgule() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Les expressions générées n'ont pas de virgule: USD et BRL doivent
    // produire exactement la même issue.
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let usd = evaluer_expression(&expr, Devise::Usd);
        let brl = evaluer_expression(&expr, Devise::Brl);
        assert_eq!(usd, brl, "modes divergents pour {expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    match evaluer_expression(&expr, Devise::Usd) {
        Sortie::Valeur(v) => assert!((v - 400.0).abs() < 1e-9, "obtenu {v}"),
        autre => panic!("attendu Valeur(400), obtenu {autre:?}"),
    }
}
