// src/app/stockage.rs
//
// Pont entre le stockage eframe (localStorage en web, fichier RON en natif)
// et les traits noyau::Lecture / noyau::Stockage.
//
// - LectureEframe  : création de l’app (cc.storage, en lecture seule)
// - StockageEframe : pendant les frames (frame.storage_mut()) ; chaque écriture est suivie
//   d’un flush, mémoire et stockage restent synchronisés.

use crate::noyau::{Lecture, Stockage};

pub struct LectureEframe<'a>(pub &'a dyn eframe::Storage);

impl Lecture for LectureEframe<'_> {
    fn lire(&self, cle: &str) -> Option<String> {
        self.0.get_string(cle)
    }
}

pub struct StockageEframe<'a>(pub &'a mut dyn eframe::Storage);

impl Lecture for StockageEframe<'_> {
    fn lire(&self, cle: &str) -> Option<String> {
        self.0.get_string(cle)
    }
}

impl Stockage for StockageEframe<'_> {
    fn ecrire(&mut self, cle: &str, valeur: String) {
        self.0.set_string(cle, valeur);
        self.0.flush();
    }
}
