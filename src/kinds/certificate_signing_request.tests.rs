use k8s_openapi::{
    ByteString, List,
    api::certificates::v1::{CertificateSigningRequestCondition, CertificateSigningRequestSpec, CertificateSigningRequestStatus},
    apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta},
};
use rstest::rstest;

use crate::table::CellValue;

use super::*;

fn request(conditions: Vec<&str>, certificate: Option<&[u8]>) -> CertificateSigningRequest {
    CertificateSigningRequest {
        metadata: ObjectMeta {
            name: Some("node-csr-x1".to_owned()),
            ..Default::default()
        },
        spec: CertificateSigningRequestSpec {
            signer_name: "kubernetes.io/kubelet-serving".to_owned(),
            username: Some("system:node:worker-1".to_owned()),
            ..Default::default()
        },
        status: Some(CertificateSigningRequestStatus {
            conditions: Some(
                conditions
                    .iter()
                    .map(|type_| CertificateSigningRequestCondition {
                        type_: (*type_).to_owned(),
                        status: "True".to_owned(),
                        ..Default::default()
                    })
                    .collect(),
            ),
            certificate: certificate.map(|bytes| ByteString(bytes.to_vec())),
        }),
    }
}

fn render_single(request: CertificateSigningRequest) -> TableRow {
    let list: ResourceList = List {
        items: vec![request],
        metadata: ListMeta::default(),
    }
    .into();

    render(&list).unwrap().into_iter().next().unwrap()
}

#[rstest]
#[case("Pending", vec![], None)]
#[case("Approved", vec!["Approved"], None)]
#[case("Approved,Issued", vec!["Approved"], Some(b"cert".as_slice()))]
#[case("Denied", vec!["Denied", "Approved"], None)]
#[case("Pending,Failed", vec!["Failed"], None)]
#[case("Approved,Failed,Issued", vec!["Approved", "Failed"], Some(b"cert".as_slice()))]
fn extract_status_test(#[case] expected: &str, #[case] conditions: Vec<&str>, #[case] certificate: Option<&[u8]>) {
    let row = render_single(request(conditions, certificate));
    assert_eq!(CellValue::from(expected), row.cells[5]);
}

#[test]
fn render_test() {
    let mut csr = request(vec![], None);
    csr.spec.expiration_seconds = Some(86400);

    let row = render_single(csr);
    assert_eq!(CellValue::from("node-csr-x1"), row.cells[0]);
    assert_eq!(CellValue::from("kubernetes.io/kubelet-serving"), row.cells[2]);
    assert_eq!(CellValue::from("system:node:worker-1"), row.cells[3]);
    assert_eq!(CellValue::from("24h"), row.cells[4]);
}

#[test]
fn render_empty_spec_test() {
    let mut csr = request(vec![], None);
    csr.spec = CertificateSigningRequestSpec::default();

    let row = render_single(csr);
    assert_eq!(CellValue::from("<none>"), row.cells[2]);
    assert_eq!(CellValue::from(""), row.cells[3]);
    assert_eq!(CellValue::from("<none>"), row.cells[4]);
}
