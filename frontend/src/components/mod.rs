pub mod debt_form;
pub mod debt_list;
