pub mod api;
pub mod ui;

use contracts::domain::a004_marketing_publication::MarketingPublication;

use crate::shared::data_table::TableRecord;

impl TableRecord for MarketingPublication {
    fn record_id(&self) -> String {
        self.id.clone()
    }
}
