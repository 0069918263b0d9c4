use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct BaseClient {
    address: String,
    client: Client,
}

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode {
        expected_status_code: StatusCode,
        status_code: StatusCode,
        message: String,
    },
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn url(&self, path: String) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    async fn handle_api_response<T: DeserializeOwned>(
        res: Result<reqwest::Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match res {
            Ok(res) => res,
            Err(_) => {
                return Err(APIError {
                    variant: APIErrorVariant::Network,
                })
            }
        };

        let status_code = res.status();
        if status_code != expected_status_code {
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode {
                    expected_status_code,
                    status_code,
                    message: res.text().await.unwrap_or_default(),
                },
            });
        }

        res.json().await.map_err(|_| APIError {
            variant: APIErrorVariant::MalformedResponse,
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.get(self.url(path)).send().await;
        Self::handle_api_response(res, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.delete(self.url(path)).send().await;
        Self::handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.post(self.url(path)).json(&body).send().await;
        Self::handle_api_response(res, expected_status_code).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.put(self.url(path)).json(&body).send().await;
        Self::handle_api_response(res, expected_status_code).await
    }
}
