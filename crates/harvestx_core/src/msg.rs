use crate::{FormField, ProductType, QualityGrade, Selector, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the marketplace search box.
    SearchChanged(String),
    /// User picked a product type in the marketplace filter.
    ProductTypeSelected(Selector<ProductType>),
    /// User picked a quality grade in the marketplace filter.
    GradeSelected(Selector<QualityGrade>),
    /// User edited one input of the create-listing form.
    FormFieldChanged { field: FormField, value: String },
    /// User submitted the create-listing form.
    ListingSubmitted,
    /// Switch to another view (user click or delayed redirect).
    Navigate(View),
    /// Fallback for placeholder wiring.
    NoOp,
}
