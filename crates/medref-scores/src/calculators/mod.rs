pub mod abcd2;
pub mod alvarado;
pub mod centor;
pub mod cha2ds2_vasc;
pub mod curb65;
pub mod gad7;
pub mod gcs;
pub mod glasgow_blatchford;
pub mod grace;
pub mod has_bled;
pub mod heart;
pub mod meld;
pub mod nihss;
pub mod perc;
pub mod qsofa;
pub mod sofa;
pub mod timi;
pub mod wells_dvt;
pub mod wells_pe;
