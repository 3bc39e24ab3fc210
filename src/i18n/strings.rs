//! Compiled-in translation tables.
//!
//! One [`PageStrings`] constant exists per page per locale. The tables are
//! static trusted content authored alongside the code: plain-text fields
//! are escaped when applied to a document, while `detailed_content` is a
//! markup fragment applied verbatim.

use crate::i18n::Locale;
use crate::page::PageKind;

/// Localized strings handed to the table widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStrings {
    /// Search box label
    pub search: &'static str,
    /// Page-length selector, with a `_MENU_` placeholder
    pub length_menu: &'static str,
    /// Paging info line, with `_START_`/`_END_`/`_TOTAL_` placeholders
    pub info: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
    /// Verb used in toggle-control labels when the column is hidden
    pub show: &'static str,
    /// Verb used in toggle-control labels when the column is visible
    pub hide: &'static str,
    /// Noun appended to toggle-control labels ("column" / "colonne")
    pub column: &'static str,
    pub export_copy: &'static str,
    pub export_csv: &'static str,
    pub export_excel: &'static str,
    pub export_print: &'static str,
}

/// All localized user-facing strings for one page in one language.
#[derive(Debug, Clone, Copy)]
pub struct PageStrings {
    /// Window/document title
    pub app_title: &'static str,
    /// Main heading
    pub page_title: &'static str,
    /// Secondary heading; only some pages carry one
    pub subtitle: Option<&'static str>,
    pub intro_text: &'static str,
    /// Markup fragment for the detailed-description block, applied verbatim
    pub detailed_content: Option<&'static str>,
    /// Label above the column toggle controls
    pub toggle_columns: Option<&'static str>,
    pub prototype_notice: &'static str,
    /// Footer contextual-navigation heading attribute
    pub footer_heading: &'static str,
    /// Prefix for the repository last-updated line
    pub last_updated: &'static str,
    /// Column titles for the dictionary table (field, description)
    pub dictionary_columns: Option<(&'static str, &'static str)>,
    pub table: TableStrings,
}

const TABLE_EN: TableStrings = TableStrings {
    search: "Search Catalogue",
    length_menu: "Show _MENU_ entries",
    info: "Showing _START_ to _END_ of _TOTAL_ entries",
    next: "Next",
    previous: "Previous",
    show: "Show",
    hide: "Hide",
    column: "column",
    export_copy: "Copy",
    export_csv: "CSV",
    export_excel: "Excel",
    export_print: "Print",
};

const TABLE_FR: TableStrings = TableStrings {
    search: "Rechercher dans le catalogue",
    length_menu: "Afficher _MENU_ entrées",
    info: "Affichage de _START_ à _END_ sur _TOTAL_ entrées",
    next: "Suivant",
    previous: "Précédent",
    show: "Afficher",
    hide: "Masquer",
    column: "colonne",
    export_copy: "Copier",
    export_csv: "CSV",
    export_excel: "Excel",
    export_print: "Imprimer",
};

const APP_TITLE_EN: &str = "PHAC Data Catalogue Viewer Prototype";
const APP_TITLE_FR: &str = "Prototype de visionneuse de catalogue de données de l'ASPC";

// ==================== Catalogue Page ====================

pub const CATALOGUE_EN: PageStrings = PageStrings {
    app_title: APP_TITLE_EN,
    page_title: "Public Health Data Catalogue",
    subtitle: None,
    intro_text: "Explore the Public Health Agency of Canada's Data Catalogue",
    detailed_content: None,
    toggle_columns: Some("Click to add or remove columns:"),
    prototype_notice: "This is just a prototype, not a real thing",
    footer_heading: "Contextual navigation",
    last_updated: "Data last updated",
    dictionary_columns: None,
    table: TABLE_EN,
};

pub const CATALOGUE_FR: PageStrings = PageStrings {
    app_title: APP_TITLE_FR,
    page_title: "Visionneuse du catalogue de données",
    subtitle: None,
    intro_text: "Explorez le catalogue de données de l'Agence de la santé publique du Canada",
    detailed_content: None,
    toggle_columns: Some("Cliquez pour ajouter ou supprimer des colonnes :"),
    prototype_notice: "Ceci est juste un prototype, pas une version définitive",
    footer_heading: "Navigation contextuelle",
    last_updated: "Dernière mise à jour des données",
    dictionary_columns: None,
    table: TABLE_FR,
};

// ==================== Dictionary Page ====================

pub const DICTIONARY_EN: PageStrings = PageStrings {
    app_title: APP_TITLE_EN,
    page_title: "Public Health Data Catalogue",
    subtitle: Some("Data Dictionary"),
    intro_text: "Learn About the Public Health Agency of Canada's Data Catalogue",
    detailed_content: Some(
        "<p class=\"mb-300\">This page lets you explore information about what data the \
         Public Health Agency of Canada (PHAC) uses to protect and promote the health of \
         people in Canada. We built this page to let you see what data we use.</p>",
    ),
    toggle_columns: None,
    prototype_notice: "This is just a prototype, not a real thing",
    footer_heading: "Contextual navigation",
    last_updated: "Data last updated",
    dictionary_columns: Some(("Field", "Description")),
    table: TABLE_EN,
};

pub const DICTIONARY_FR: PageStrings = PageStrings {
    app_title: APP_TITLE_FR,
    page_title: "Visionneuse du catalogue de données",
    subtitle: Some("Dictionnaire de données"),
    intro_text: "Explorez le catalogue de données de l'Agence de la santé publique du Canada",
    detailed_content: Some(
        "<p class=\"mb-300\">Cette page vous permet d'explorer des informations sur les \
         données utilisées par l'Agence de la santé publique du Canada (ASPC) pour protéger \
         et promouvoir la santé des personnes au Canada. Nous avons créé cette page pour \
         vous montrer les données que nous utilisons.</p>",
    ),
    toggle_columns: None,
    prototype_notice: "Ceci est juste un prototype, pas une version définitive",
    footer_heading: "Navigation contextuelle",
    last_updated: "Dernière mise à jour des données",
    dictionary_columns: Some(("Champ", "Description")),
    table: TABLE_FR,
};

// ==================== About Page ====================

pub const ABOUT_EN: PageStrings = PageStrings {
    app_title: APP_TITLE_EN,
    page_title: "Public Health Data Catalogue",
    subtitle: Some("Learn More"),
    intro_text: "Learn About the Public Health Agency of Canada's Data Catalogue",
    detailed_content: Some(
        "<p class=\"mb-300\">This page lets you explore information about what data the \
         Public Health Agency of Canada (PHAC) uses to protect and promote the health of \
         people in Canada. We built this page to let you see what data we use.</p>\
         <p class=\"mb-300\">This page includes datasets that are of public interest. It \
         includes a variety of datasets covering topics like public health trends, disease \
         tracking, and population health statistics. Not all datasets are permitted to be \
         shared publicly due to things like privacy concerns or data sharing agreements.</p>\
         <h3 class=\"mt-600 mb-300\">Related Links</h3>\
         <ul class=\"list-disc mb-300\">\
         <li><a href=\"https://www.canada.ca/en/public-health/services/data/gathering.html\">Gathering Data</a></li>\
         <li><a href=\"https://www.tbs-sct.canada.ca/pol/doc-eng.aspx?id=32603\">Policy on Service and Digital</a></li>\
         <li><a href=\"https://open.canada.ca/en\">Open Government</a></li>\
         </ul>",
    ),
    toggle_columns: None,
    prototype_notice: "This is just a prototype, not a real thing",
    footer_heading: "Contextual navigation",
    last_updated: "Data last updated",
    dictionary_columns: None,
    table: TABLE_EN,
};

pub const ABOUT_FR: PageStrings = PageStrings {
    app_title: APP_TITLE_FR,
    page_title: "Visionneuse du catalogue de données",
    subtitle: Some("Apprendre encore plus"),
    intro_text: "Explorez le catalogue de données de l'Agence de la santé publique du Canada",
    detailed_content: Some(
        "<p class=\"mb-300\">Cette page vous permet d'explorer des informations sur les \
         données utilisées par l'Agence de la santé publique du Canada (ASPC) pour protéger \
         et promouvoir la santé des personnes au Canada. Nous avons créé cette page pour \
         vous montrer les données que nous utilisons.</p>\
         <p class=\"mb-300\">Cette page comprend des ensembles de données d'intérêt public. \
         Elle contient une variété de données couvrant des sujets tels que les tendances en \
         santé publique, le suivi des maladies et les statistiques de santé de la \
         population. Tous les ensembles de données ne peuvent pas être partagés publiquement \
         en raison de préoccupations liées à la confidentialité ou à des accords de partage \
         de données.</p>\
         <ul class=\"list-disc mb-300\">\
         <li><a href=\"https://www.canada.ca/fr/sante-publique/services/donnee/collecte.html\">Collecte de données</a></li>\
         <li><a href=\"https://www.tbs-sct.canada.ca/pol/doc-fra.aspx?id=32603\">Politique sur le service et le numérique</a></li>\
         <li><a href=\"https://ouvert.canada.ca/fr\">Gouvernement ouvert</a></li>\
         </ul>",
    ),
    toggle_columns: None,
    prototype_notice: "Ceci est juste un prototype, pas une version définitive",
    footer_heading: "Navigation contextuelle",
    last_updated: "Dernière mise à jour des données",
    dictionary_columns: None,
    table: TABLE_FR,
};

/// The translation table for a page in a locale.
pub fn page_strings(kind: PageKind, locale: Locale) -> &'static PageStrings {
    match (kind, locale) {
        (PageKind::Catalogue, Locale::English) => &CATALOGUE_EN,
        (PageKind::Catalogue, Locale::French) => &CATALOGUE_FR,
        (PageKind::Dictionary, Locale::English) => &DICTIONARY_EN,
        (PageKind::Dictionary, Locale::French) => &DICTIONARY_FR,
        (PageKind::About, Locale::English) => &ABOUT_EN,
        (PageKind::About, Locale::French) => &ABOUT_FR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pairs() -> Vec<(&'static PageStrings, &'static PageStrings)> {
        vec![
            (&CATALOGUE_EN, &CATALOGUE_FR),
            (&DICTIONARY_EN, &DICTIONARY_FR),
            (&ABOUT_EN, &ABOUT_FR),
        ]
    }

    // ==================== Completeness Tests ====================

    #[test]
    fn test_no_empty_required_fields() {
        for (en, fr) in all_pairs() {
            for strings in [en, fr] {
                assert!(!strings.app_title.is_empty());
                assert!(!strings.page_title.is_empty());
                assert!(!strings.intro_text.is_empty());
                assert!(!strings.prototype_notice.is_empty());
                assert!(!strings.footer_heading.is_empty());
            }
        }
    }

    #[test]
    fn test_both_locales_fill_the_same_fields() {
        // A field present in one language must be present in the other.
        for (en, fr) in all_pairs() {
            assert_eq!(en.subtitle.is_some(), fr.subtitle.is_some());
            assert_eq!(en.detailed_content.is_some(), fr.detailed_content.is_some());
            assert_eq!(en.toggle_columns.is_some(), fr.toggle_columns.is_some());
            assert_eq!(
                en.dictionary_columns.is_some(),
                fr.dictionary_columns.is_some()
            );
        }
    }

    #[test]
    fn test_placeholders_survive_in_both_locales() {
        for table in [&TABLE_EN, &TABLE_FR] {
            assert!(table.length_menu.contains("_MENU_"));
            assert!(table.info.contains("_START_"));
            assert!(table.info.contains("_END_"));
            assert!(table.info.contains("_TOTAL_"));
        }
    }

    // ==================== Page Lookup Tests ====================

    #[test]
    fn test_page_strings_lookup() {
        let s = page_strings(PageKind::Catalogue, Locale::French);
        assert_eq!(s.page_title, "Visionneuse du catalogue de données");

        let s = page_strings(PageKind::Dictionary, Locale::English);
        assert_eq!(s.subtitle, Some("Data Dictionary"));
    }

    #[test]
    fn test_catalogue_has_toggle_label_other_pages_do_not() {
        assert!(page_strings(PageKind::Catalogue, Locale::English)
            .toggle_columns
            .is_some());
        assert!(page_strings(PageKind::About, Locale::English)
            .toggle_columns
            .is_none());
        assert!(page_strings(PageKind::Dictionary, Locale::French)
            .toggle_columns
            .is_none());
    }

    #[test]
    fn test_dictionary_columns_are_localized() {
        assert_eq!(
            page_strings(PageKind::Dictionary, Locale::English).dictionary_columns,
            Some(("Field", "Description"))
        );
        assert_eq!(
            page_strings(PageKind::Dictionary, Locale::French).dictionary_columns,
            Some(("Champ", "Description"))
        );
    }

    #[test]
    fn test_markup_slots_contain_markup() {
        for strings in [&ABOUT_EN, &ABOUT_FR, &DICTIONARY_EN, &DICTIONARY_FR] {
            let markup = strings.detailed_content.expect("detailed content");
            assert!(markup.contains("<p"));
        }
    }
}
