pub mod api;
pub mod ui;

use contracts::domain::a003_contact_form::ContactForm;

use crate::shared::data_table::TableRecord;

impl TableRecord for ContactForm {
    fn record_id(&self) -> String {
        self.id.clone()
    }
}
