pub mod classify_pdf_route;
pub mod classify_request;
pub mod classify_text_route;
