// fixtures/sheets/gems.rs
//
// Sample exports shaped like the real gallery sheet: padded cells, blank
// trailing rows, an extra column and quoted multi-line descriptions.

use crate::fixtures::TestSheet;

/// The typical gallery sheet
pub struct GemsSheet;

impl TestSheet for GemsSheet {
    fn csv() -> &'static str {
        concat!(
            "gem_id,gem_category,gem_name,gem_desc,gem_imageurl,notes\n",
            "1,Portrait,Studio Portrait,\"Soft light, neutral backdrop\",https://example.com/1.png,draft\n",
            " 12 , Landscape ,  Misty Valley  ,Morning fog over hills,,\n",
            "3,Fantasy,Dragon Rider,\"A rider on a dragon.\nTwo lines of prompt.\",,\n",
            "10,Portrait,Vintage Film,Grainy 35mm look,,\n",
            "2,Product,,Flat lay with shadows,,\n",
            ",Misc,Untitled Idea,No id yet,,\n",
            ",,,,,\n",
            "   ,  ,   ,only description,,\n",
        )
    }

    fn expected_ids() -> &'static [&'static str] {
        &["12", "10", "3", "2", "1", ""]
    }
}

/// Numeric and non-numeric ids in one sheet
pub struct MixedIdsSheet;

impl TestSheet for MixedIdsSheet {
    fn csv() -> &'static str {
        concat!(
            "gem_id,gem_name\n",
            "x1,Alpha\n",
            "x2,Beta\n",
        )
    }

    fn expected_ids() -> &'static [&'static str] {
        &["x2", "x1"]
    }
}

/// Columns in a different order and one column missing
pub struct ReorderedColumnsSheet;

impl TestSheet for ReorderedColumnsSheet {
    fn csv() -> &'static str {
        concat!(
            "gem_name,gem_desc,gem_id\n",
            "Second,desc b,2\n",
            "First,desc a,10\n",
        )
    }

    fn expected_ids() -> &'static [&'static str] {
        &["10", "2"]
    }
}
